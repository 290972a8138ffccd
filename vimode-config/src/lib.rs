use std::path::Path;

use serde::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;

pub use error::{ConfigError, ConfigResult};

/// Number of layers the host firmware can address
pub const MAX_LAYER_NUM: u8 = 32;

/// Configurations read from `keyboard.toml`.
///
/// Only the `[vim]` table is consumed here, other tables belong to the host firmware.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyboardTomlConfig {
    #[serde(default)]
    pub vim: VimConfig,
}

/// Layers and lighting of the modal keymap
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VimConfig {
    #[serde_inline_default(1)]
    pub number_layer: u8,
    #[serde_inline_default(2)]
    pub function_layer: u8,
    #[serde_inline_default(3)]
    pub control_layer: u8,
    #[serde_inline_default(4)]
    pub vim_layer: u8,
    #[serde_inline_default(5)]
    pub delete_yank_layer: u8,
    /// Lowest brightness of the vim lighting preset
    #[serde_inline_default(150)]
    pub min_brightness: u8,
    /// Saturation of the vim lighting preset
    #[serde_inline_default(240)]
    pub saturation: u8,
}

impl Default for VimConfig {
    fn default() -> Self {
        Self {
            number_layer: 1,
            function_layer: 2,
            control_layer: 3,
            vim_layer: 4,
            delete_yank_layer: 5,
            min_brightness: 150,
            saturation: 240,
        }
    }
}

impl VimConfig {
    /// Check that every layer is addressable and no two roles share a layer
    pub fn validate(&self) -> ConfigResult<()> {
        let layers = [
            ("vim.number_layer", self.number_layer),
            ("vim.function_layer", self.function_layer),
            ("vim.control_layer", self.control_layer),
            ("vim.vim_layer", self.vim_layer),
            ("vim.delete_yank_layer", self.delete_yank_layer),
        ];
        for (i, (field, layer)) in layers.iter().enumerate() {
            if *layer == 0 || *layer >= MAX_LAYER_NUM {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("layer {} is out of range 1..{}", layer, MAX_LAYER_NUM),
                });
            }
            if let Some((other, _)) = layers[..i].iter().find(|(_, l)| l == layer) {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("layer {} is already used by {}", layer, other),
                });
            }
        }
        // The delete/yank layer covers every key while an operator is pending
        if let Some((other, _)) = layers[..4].iter().find(|(_, l)| *l > self.delete_yank_layer) {
            return Err(ConfigError::Validation {
                field: "vim.delete_yank_layer".to_string(),
                message: format!(
                    "layer {} must be above every other layer, {} is higher",
                    self.delete_yank_layer, other
                ),
            });
        }
        Ok(())
    }

    /// Check that every layer exists in a keymap of `num_layer` layers
    pub fn validate_layer_num(&self, num_layer: u8) -> ConfigResult<()> {
        let layers = [
            ("vim.number_layer", self.number_layer),
            ("vim.function_layer", self.function_layer),
            ("vim.control_layer", self.control_layer),
            ("vim.vim_layer", self.vim_layer),
            ("vim.delete_yank_layer", self.delete_yank_layer),
        ];
        match layers.iter().find(|(_, l)| *l >= num_layer) {
            Some((field, layer)) => Err(ConfigError::Validation {
                field: field.to_string(),
                message: format!("layer {} doesn't exist, the keymap has {} layers", layer, num_layer),
            }),
            None => Ok(()),
        }
    }
}

impl KeyboardTomlConfig {
    /// Parse and validate a `keyboard.toml` string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: "<string>".to_string(),
            message: e.message().to_string(),
        })?;
        config.vim.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a `keyboard.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParse { message, .. } => ConfigError::TomlParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }
}
