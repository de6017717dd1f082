// File: ./src/storage.rs
// Lock and atomic-write helpers for the files this app owns on disk.
//
// Tasks are intentionally in-memory only; the config file is the one thing
// written here, but the helpers are kept generic over paths.
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar lock file path: "config.toml" -> "config.toml.lock".
fn get_lock_path(file_path: &Path) -> PathBuf {
    let mut lock_path = file_path.to_path_buf();
    if let Some(ext) = lock_path.extension() {
        let mut new_ext = ext.to_os_string();
        new_ext.push(".lock");
        lock_path.set_extension(new_ext);
    } else {
        lock_path.set_extension("lock");
    }
    lock_path
}

/// Runs `f` while holding an exclusive lock on a sidecar lock file, so two
/// processes cannot interleave read-modify-write cycles on the same file.
pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let lock_path = get_lock_path(file_path);
    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    file.lock_exclusive()?;
    let result = f();
    file.unlock()?;
    result
}

/// Atomic write: Write to .tmp file then rename
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppContext, TestContext};

    #[test]
    fn atomic_write_replaces_contents() {
        let ctx = TestContext::new();
        let path = ctx.get_data_dir().unwrap().join("scratch.toml");
        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn with_lock_passes_through_result() {
        let ctx = TestContext::new();
        let path = ctx.get_data_dir().unwrap().join("guarded.toml");
        let value = with_lock(&path, || Ok(42)).unwrap();
        assert_eq!(value, 42);
        assert!(get_lock_path(&path).exists());
    }
}
