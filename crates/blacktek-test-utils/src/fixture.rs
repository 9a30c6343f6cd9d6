use blacktek_config::{ConfigStore, ConfigStoreOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory laid out like a server root: `config.lua` next to
/// `config/stages.toml`.
pub struct ConfigFixture {
    dir: TempDir,
}

impl ConfigFixture {
    /// Fresh empty directory, removed on drop.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tmp"),
        }
    }

    /// Server root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `<root>/config.lua`.
    pub fn script_path(&self) -> PathBuf {
        self.root().join("config.lua")
    }

    /// `<root>/config/stages.toml`.
    pub fn stages_path(&self) -> PathBuf {
        self.root().join("config").join("stages.toml")
    }

    /// Writes the config script, replacing any previous one.
    pub fn write_script(&self, contents: &str) -> &Self {
        fs::write(self.script_path(), contents).expect("write script");
        self
    }

    /// Writes the stage file, creating `config/` if needed.
    pub fn write_stages(&self, contents: &str) -> &Self {
        let path = self.stages_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("dir");
        }
        fs::write(path, contents).expect("write stages");
        self
    }

    /// Deletes the stage file if present.
    pub fn remove_stages(&self) -> &Self {
        let path = self.stages_path();
        if path.exists() {
            fs::remove_file(path).expect("remove stages");
        }
        self
    }

    /// Options pointing the default Lua and TOML sources at this fixture.
    pub fn options(&self) -> ConfigStoreOptions {
        ConfigStoreOptions::new()
            .with_config_path(self.script_path())
            .with_stages_path(self.stages_path())
    }

    /// Unloaded store over [`Self::options`].
    pub fn store(&self) -> ConfigStore {
        ConfigStore::with_options(self.options())
    }
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}
