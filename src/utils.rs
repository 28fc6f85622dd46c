use std::{collections::HashSet, path::Path};

use crate::error::Result;

/// Parses an identifier list, one ID per line.
///
/// Everything after a `#` is a comment, surrounding whitespace is trimmed and
/// lines left empty are skipped.
pub fn parse_id_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads an identifier list file, see [`parse_id_list`].
pub async fn load_id_file(path: &Path) -> Result<Vec<String>> {
    let content = async_fs::read_to_string(path).await?;
    Ok(parse_id_list(&content))
}

/// Writes identifiers one per line, in the given order.
pub async fn save_id_file(path: &Path, ids: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent).await?;
        }
    }

    let mut content = String::with_capacity(ids.iter().map(|id| id.len() + 1).sum());
    for id in ids {
        content.push_str(id);
        content.push('\n');
    }

    async_fs::write(path, content).await?;
    Ok(())
}

/// Drops repeated identifiers, keeping the first occurrence of each.
pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}

/// Parses a `--limit` value; zero is rejected since it would select nothing.
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(format!("invalid limit '{}': {}", s, e)),
    }
}
