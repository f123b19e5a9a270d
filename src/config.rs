//! Layered configuration
//!
//! Built-in defaults, then the user config file, then a project file in the
//! working directory, then an explicit `--config` path, then `WORDLE_`
//! environment variables. Later sources win.

use crate::dictionary::SOLUTIONS_POOL_SIZE;
use crate::game::RevealTiming;
use crate::game::challenge::ANONYMOUS_CREATOR;
use crate::storage::FileStore;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wordle-challenge";
const PROJECT_FILE: &str = "wordle-challenge.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name written into challenge tokens
    pub player_name: String,
    /// How many leading dictionary words can be secrets
    pub solutions_pool_size: usize,
    /// Where daily records live; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// First word of the share text
    pub share_title: String,
    /// Base URL challenge links are built on
    pub link_base: String,
    pub reveal: RevealTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: ANONYMOUS_CREATOR.to_string(),
            solutions_pool_size: SOLUTIONS_POOL_SIZE,
            data_dir: None,
            share_title: "Shash Wordle".to_string(),
            link_base: "https://example.com/wordle/".to_string(),
            reveal: RevealTiming::default(),
        }
    }
}

impl GameConfig {
    /// Directory for the file-backed daily store
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(FileStore::default_dir)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from every source
    ///
    /// # Errors
    ///
    /// Returns an error if a present config file is malformed or a value has
    /// the wrong type.
    pub fn load(config_path: Option<&Path>) -> Result<GameConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(GameConfig::default()));

        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            figment = figment.merge(Toml::file(global));
        }

        let project = PathBuf::from(PROJECT_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("WORDLE_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Defaults overlaid with a single file, ignoring every other source
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed.
    pub fn load_file(path: &Path) -> Result<GameConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(GameConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_game_constants() {
        let config = GameConfig::default();
        assert_eq!(config.solutions_pool_size, 200);
        assert_eq!(config.player_name, "Someone");
        assert_eq!(config.reveal.stagger_ms, 260);
    }

    #[test]
    fn file_overrides_only_what_it_sets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "player_name = \"Ana\"\ndata_dir = \"/tmp/wordle\"\n\n[reveal]\nstagger_ms = 100\n",
        )
        .unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.player_name, "Ana");
        assert_eq!(config.store_dir(), PathBuf::from("/tmp/wordle"));
        assert_eq!(config.reveal.stagger_ms, 100);
        assert_eq!(config.reveal.settle_ms, 350);
        assert_eq!(config.share_title, "Shash Wordle");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "solutions_pool_size = \"lots\"\n").unwrap();

        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn global_path_is_namespaced() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("wordle-challenge/config.toml"));
        }
    }
}
