//! Carrier and shadow file selection.
//!
//! Candidates are the regular files of one directory, probed by header only
//! and filtered through a caller-supplied predicate. Entries are visited in
//! file-name order so the same directory always yields the same selection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bitmap::{probe_bitmap, BmpProbe};
use crate::error::{Result, ShareError};

/// Collects up to `limit` regular files in `dir` whose headers satisfy
/// `accept`. Files that are not bitmaps are skipped silently; IO failures
/// propagate.
pub fn collect_valid<F>(dir: &Path, limit: usize, accept: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&BmpProbe) -> bool,
{
    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    let mut found = Vec::new();
    for path in candidates {
        if found.len() == limit {
            break;
        }
        if let Some(probe) = probe_bitmap(&path)? {
            if accept(&probe) {
                found.push(path);
            }
        }
    }

    Ok(found)
}

/// The first n carrier files of `dir` for a (k, n) scheme.
pub fn carrier_files(dir: &Path, k: u16, n: u16) -> Result<Vec<PathBuf>> {
    let found = collect_valid(dir, n as usize, |probe| probe.is_valid_carrier(k))?;
    if found.len() < n as usize {
        return Err(ShareError::InsufficientCarriers {
            dir: dir.to_path_buf(),
            found: found.len(),
            needed: n as usize,
            k,
            n,
        });
    }
    Ok(found)
}

/// The k shadow files of `dir` able to reconstruct a secret of
/// `secret_size` pixel bytes.
pub fn shadow_files(dir: &Path, k: u16, secret_size: u32) -> Result<Vec<PathBuf>> {
    let found = collect_valid(dir, k as usize, |probe| {
        probe.is_valid_shadow(k, secret_size)
    })?;
    if found.len() < k as usize {
        return Err(ShareError::InsufficientShadows(format!(
            "found {} usable shadow files in {}, need {}",
            found.len(),
            dir.display(),
            k
        )));
    }
    Ok(found)
}

/// Number of regular files in `dir`; the default for n when the caller
/// does not pass one.
pub fn count_regular_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        if entry?.file_type()?.is_file() {
            count += 1;
        }
    }
    Ok(count)
}
