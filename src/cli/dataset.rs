use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::auth, error, info, management::DatasetBuilder, success, types::EntityKind, utils,
    warning,
};

/// Builds a JSON dataset from a track identifier file.
///
/// Every track is combined with its first artist. Artists are cached for the
/// whole run, so tracks sharing an artist cost a single artist lookup. The
/// first failing lookup aborts the run before anything is written.
///
/// # Example Usage
///
/// ```bash
/// spotcollect dataset --input track_ids.txt --output dataset.json --limit 100
/// ```
pub async fn dataset(input: &Path, output: &Path, limit: Option<usize>) {
    let mut track_ids = match utils::load_id_file(input).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Cannot read track ids from {}. Err: {}", input.display(), e);
        }
    };

    if track_ids.is_empty() {
        warning!("No track ids in {}, nothing to do.", input.display());
        return;
    }

    if let Some(limit) = limit {
        track_ids.truncate(limit);
    }

    info!("Building dataset for {} tracks", track_ids.len());
    let transport = auth::transport().await;
    let mut builder = DatasetBuilder::new(&transport);

    let pb = ProgressBar::new(track_ids.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    for track_id in &track_ids {
        pb.set_message(track_id.clone());
        if let Err(e) = builder.add_track(track_id).await {
            pb.finish_and_clear();
            error!("Failed to build row for track {}. Err: {}", track_id, e);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if let Err(e) = builder.persist(output).await {
        error!("Failed to write dataset. Err: {}", e);
    }

    let cache = builder.fetcher().cache();
    success!(
        "Saved {} rows to {} ({} tracks, {} artists fetched)",
        builder.rows().len(),
        output.display(),
        cache.count(EntityKind::Track),
        cache.count(EntityKind::Artist)
    );
}
