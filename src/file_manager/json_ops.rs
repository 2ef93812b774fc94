// Atomic JSON file operations

use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let _lock = FILE_LOCK.lock().map_err(|e| format!("Lock error: {}", e))?;

    if !path.exists() {
        return Err(format!("File not found: {:?}", path));
    }

    let mut file = File::open(path).map_err(|e| format!("Failed to open {:?}: {}", path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse JSON from {:?}: {}", path, e))
}

/// Writes JSON atomically using write-to-temp-then-rename
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), String> {
    let _lock = FILE_LOCK.lock().map_err(|e| format!("Lock error: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {:?}: {}", parent, e))?;
    }

    let json_string = serde_json::to_string_pretty(data)
        .map_err(|e| format!("Failed to serialize data: {}", e))?;

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path)
        .map_err(|e| format!("Failed to create temp file {:?}: {}", temp_path, e))?;

    temp_file
        .write_all(json_string.as_bytes())
        .map_err(|e| format!("Failed to write to temp file: {}", e))?;

    temp_file
        .sync_all()
        .map_err(|e| format!("Failed to sync temp file: {}", e))?;

    fs::rename(&temp_path, path)
        .map_err(|e| format!("Failed to rename temp file to {:?}: {}", path, e))?;

    Ok(())
}

pub fn initialize_json_file<T: Serialize>(path: &Path, default: &T) -> Result<(), String> {
    if !path.exists() {
        println!("Initializing JSON file: {:?}", path);
        write_json_file(path, default)?;
    }
    Ok(())
}

/// Reads a stored collection, falling back to the seed when the file is
/// missing or unparsable. The seed is written back so the next load sees it;
/// a failed seed write is logged but the seed is still returned.
pub fn load_or_seed<T>(path: &Path, seed: T) -> T
where
    T: DeserializeOwned + Serialize,
{
    if path.exists() {
        match read_json_file(path) {
            Ok(data) => return data,
            Err(e) => warn!("Replacing unreadable store file with seed data: {}", e),
        }
    }

    if let Err(e) = write_json_file(path, &seed) {
        warn!("Failed to seed {:?}: {}", path, e);
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_json_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "sweet-delights-json-{}-{}-{}.json",
            tag,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = temp_json_path("round-trip");
        let data = vec!["croissant".to_string(), "baguette".to_string()];

        write_json_file(&path, &data).unwrap();
        let loaded: Vec<String> = read_json_file(&path).unwrap();
        assert_eq!(loaded, data);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_initialize_does_not_overwrite() {
        let path = temp_json_path("init");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();

        initialize_json_file(&path, &Vec::<i32>::new()).unwrap();
        let loaded: Vec<i32> = read_json_file(&path).unwrap();
        assert_eq!(loaded, vec![1, 2, 3]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_seed_missing_file_writes_seed() {
        let path = temp_json_path("seed-missing");
        let loaded = load_or_seed(&path, vec![5u32]);
        assert_eq!(loaded, vec![5]);

        // The seed must now be on disk
        let reread: Vec<u32> = read_json_file(&path).unwrap();
        assert_eq!(reread, vec![5]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_seed_corrupt_file_writes_seed() {
        let path = temp_json_path("seed-corrupt");
        fs::write(&path, "{not json at all").unwrap();

        let loaded = load_or_seed(&path, vec![7u32]);
        assert_eq!(loaded, vec![7]);

        let reread: Vec<u32> = read_json_file(&path).unwrap();
        assert_eq!(reread, vec![7]);

        let _ = fs::remove_file(&path);
    }
}
