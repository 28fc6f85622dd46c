use std::path::PathBuf;

use clap::{
    ArgGroup, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcollect::{
    cli, config, error, fields::Field, management::PlaylistSource, types::EntityKind, utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Collect unique track ids from playlists
    Collect(CollectOptions),

    /// Show fields of a track
    Track(LookupOptions),

    /// Show fields of an artist
    Artist(LookupOptions),

    /// Build a JSON dataset from a track id file
    Dataset(DatasetOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["from_file", "playlist"]),
))]
pub struct CollectOptions {
    /// File with one playlist id per line (`#` starts a comment)
    #[clap(long)]
    pub from_file: Option<PathBuf>,

    /// Playlist id; can be repeated
    #[clap(long, num_args = 1)]
    pub playlist: Vec<String>,

    /// Stop once this many unique tracks are collected (0 = all playlists)
    #[clap(long)]
    pub target: Option<usize>,

    /// File receiving the collected track ids
    #[clap(long, default_value = "track_ids.txt")]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct LookupOptions {
    /// Spotify id of the entity
    pub id: String,

    /// Print a single field only
    #[clap(long)]
    pub field: Option<Field>,
}

#[derive(Parser, Debug, Clone)]
pub struct DatasetOptions {
    /// Track id file, as written by `collect`
    #[clap(long, default_value = "track_ids.txt")]
    pub input: PathBuf,

    /// File receiving the dataset rows
    #[clap(long, default_value = "dataset.json")]
    pub output: PathBuf,

    /// Only use the first N track ids
    #[clap(long, value_parser = utils::parse_limit)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Collect(opt) => {
            let source = match opt.from_file {
                Some(path) => PlaylistSource::File(path),
                None => PlaylistSource::Inline(opt.playlist),
            };
            cli::collect(source, opt.target, &opt.output).await
        }
        Command::Track(opt) => cli::lookup(EntityKind::Track, &opt.id, opt.field).await,
        Command::Artist(opt) => cli::lookup(EntityKind::Artist, &opt.id, opt.field).await,
        Command::Dataset(opt) => cli::dataset(&opt.input, &opt.output, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
