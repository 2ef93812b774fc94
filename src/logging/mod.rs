//! Log file retention for the storefront app

use crate::utils::get_logs_dir;
use log::info;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

const LOG_RETENTION_DAYS: u64 = 7;

/// Deletes `.log` files in the app log directory older than the retention
/// window. Called once at startup.
pub fn cleanup_old_logs() {
    let logs_dir = get_logs_dir();
    if !logs_dir.exists() {
        return;
    }

    let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);

    let Ok(entries) = fs::read_dir(&logs_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_log = path.extension().map_or(false, |ext| ext == "log");
        if is_log && is_older_than(&path, retention) && fs::remove_file(&path).is_ok() {
            info!("Cleaned up old log: {:?}", path.file_name());
        }
    }
}

fn is_older_than(path: &Path, retention: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|meta| meta.modified()) else {
        return false;
    };
    SystemTime::now()
        .duration_since(modified)
        .map_or(false, |age| age > retention)
}
