use std::path::Path;

use crate::{
    cli::auth, error, info,
    management::{self, PlaylistSource},
    success, warning,
};

/// Collects unique track identifiers from playlists and saves them to a file.
///
/// Playlists are walked in order until `target` unique tracks are collected
/// (or all of them when no target is given). The output file is written only
/// after every requested playlist was walked successfully.
///
/// # Arguments
///
/// * `source` - Playlist list file or inline playlist identifiers
/// * `target` - Number of unique tracks after which remaining playlists are skipped
/// * `output` - File receiving one track identifier per line
///
/// # Example Usage
///
/// ```bash
/// spotcollect collect --from-file playlists.txt --target 2000
/// spotcollect collect --playlist 37i9dQZF1DXcBWIGoYBM5M --output ids.txt
/// ```
pub async fn collect(source: PlaylistSource, target: Option<usize>, output: &Path) {
    let playlists = match source.resolve().await {
        Ok(playlists) => playlists,
        Err(e) => {
            error!("Cannot read playlist identifiers. Err: {}", e);
        }
    };

    if playlists.is_empty() {
        warning!("No playlist identifiers given, nothing to collect.");
        return;
    }

    info!("Collecting tracks from {} playlists", playlists.len());
    let transport = auth::transport().await;

    match management::collect_to_file(&transport, &playlists, target, output).await {
        Ok(collection) => {
            if let Some(target) = target.filter(|t| *t > 0) {
                if collection.len() < target {
                    warning!(
                        "Only {} of {} requested tracks collected",
                        collection.len(),
                        target
                    );
                }
            }
            success!(
                "Saved {} track ids to {}",
                collection.len(),
                output.display()
            );
        }
        Err(e) => {
            error!("Collection failed, nothing was written. Err: {}", e);
        }
    }
}
