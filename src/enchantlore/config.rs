//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering TOML files, environment
//! variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ENCHANTLORE_DISPLAY_PREFIX`, `ENCHANTLORE_STRICT_DISPLAY_NAMES`.
//! 2. **Project Config**: a file passed to [`EnchantConfig::load`].
//! 3. **Global Config**: `enchantlore.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `display_prefix` | `§7` | Prefix the default namer puts before an enchant name |
//! | `strict_display_names` | `true` | Reject display names where one name plus a space starts the other |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILENAME: &str = "enchantlore.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnchantConfig {
    /// Prefix placed before the enchant name in lore (formatting codes, usually).
    #[config(env = "ENCHANTLORE_DISPLAY_PREFIX", default = "§7")]
    pub display_prefix: String,

    /// When set, registering an enchant whose display name, followed by a
    /// space, starts an existing one (or the other way round) fails.
    #[config(env = "ENCHANTLORE_STRICT_DISPLAY_NAMES", default = true)]
    pub strict_display_names: bool,
}

impl Default for EnchantConfig {
    /// The compiled `#[config(default = ...)]` values, with no file or env layer.
    fn default() -> Self {
        Self::builder()
            .load()
            .expect("every EnchantConfig field has a compiled default")
    }
}

impl EnchantConfig {
    /// Loads the layered configuration, with `project_file` above the global file.
    pub fn load(project_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = project_file {
            builder = builder.file(path);
        }
        if let Some(path) = global_config_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Loads a single file over the defaults, ignoring env and the global file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::builder().file(path).load()?)
    }
}

/// Location of the user-wide config file, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "enchantlore").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
