// File: ./src/context.rs
/*! Filesystem locations, behind a trait so tests never touch real dirs.

Everything that reads or writes a path goes through an `AppContext`:

- `StandardContext` resolves the platform dirs with
  `directories::ProjectDirs`, or puts both dirs under one root when the
  user passed `--root`.
- `TestContext` works inside a throwaway temp directory and deletes it on
  drop.

There is no global state and no env-var lookup in here. Whoever needs a
path takes a `&dyn AppContext` (or the `SharedContext` Arc alias), which
is what keeps the test suite hermetic.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Where the app keeps its files. Object-safe on purpose: the TUI state
/// holds it as `Arc<dyn AppContext>`.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_log_file_path(&self) -> Option<PathBuf> {
        self.get_data_dir().ok().map(|p| p.join("nudge.log"))
    }
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    /// With `override_root` set, `data` and `config` subdirectories are
    /// created under that root instead of the platform locations.
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Could not create directory {:?}", path))?;
        }
        Ok(path)
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "nudge", "nudge")
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("data"));
        }
        let proj =
            Self::get_proj_dirs().ok_or_else(|| anyhow::anyhow!("No home directory found"))?;
        Self::ensure_exists(proj.data_dir().to_path_buf())
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("config"));
        }
        let proj =
            Self::get_proj_dirs().ok_or_else(|| anyhow::anyhow!("No home directory found"))?;
        Self::ensure_exists(proj.config_dir().to_path_buf())
    }
}

// --- Test Implementation ---

#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Backed by a fresh uniquely-named temp directory, which lives until
    /// the `TestContext` is dropped.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let root = std::env::temp_dir().join(format!("nudge_test_{}", uuid));
        // A test without its sandbox dir cannot run at all.
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("data");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("config");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Cleanup is best effort.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

pub type SharedContext = std::sync::Arc<dyn AppContext>;
