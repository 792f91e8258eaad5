//! Environment/runtime helpers
//!
//! Sanity checks to ensure the backing file's directory exists at startup.

/// Ensure the parent directory of a SQLite database URL exists so that
/// `mode=rwc` can create the file on first start.
pub async fn ensure_db_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

/// Extract the file path from a `sqlite://` URL; `None` for in-memory
/// databases or non-SQLite URLs.
fn sqlite_file_path(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    if rest.starts_with(":memory:") || rest.is_empty() {
        return None;
    }
    let path = rest.split('?').next().unwrap_or(rest);
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://data/wishlist.db?mode=rwc"),
            Some("data/wishlist.db".to_string())
        );
    }

    #[test]
    fn memory_urls_have_no_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
    }
}
