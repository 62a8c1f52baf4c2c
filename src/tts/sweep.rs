use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Outcome of one pass over the audio directory.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub deleted: usize,
    pub kept: usize,
    pub errors: Vec<(PathBuf, String)>,
}

/// Deletes regular files whose modification time is more than `max_age` ago.
///
/// Best effort: a failure on one entry is recorded and the pass moves on.
pub fn sweep_older_than(dir: &Path, max_age: Duration) -> SweepReport {
    sweep_at(dir, max_age, SystemTime::now())
}

fn sweep_at(dir: &Path, max_age: Duration, now: SystemTime) -> SweepReport {
    let mut report = SweepReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            report.errors.push((dir.to_path_buf(), e.to_string()));
            return report;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.errors.push((dir.to_path_buf(), e.to_string()));
                continue;
            }
        };
        let path = entry.path();

        match is_expired(&entry, max_age, now) {
            Ok(true) => match fs::remove_file(&path) {
                Ok(()) => report.deleted += 1,
                Err(e) => report.errors.push((path, e.to_string())),
            },
            Ok(false) => report.kept += 1,
            Err(e) => report.errors.push((path, e.to_string())),
        }
    }

    report
}

fn is_expired(entry: &fs::DirEntry, max_age: Duration, now: SystemTime) -> std::io::Result<bool> {
    let metadata = entry.metadata()?;
    if !metadata.is_file() {
        return Ok(false);
    }

    let modified = metadata.modified()?;
    // Files stamped in the future are treated as fresh.
    Ok(now
        .duration_since(modified)
        .map(|age| age > max_age)
        .unwrap_or(false))
}
