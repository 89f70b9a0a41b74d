//! Settings file support
//!
//! A settings file is a JSON object with camelCase keys. Every field is
//! optional; card dimensions are in inches regardless of `isImperial`, which
//! only selects the display unit.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::cli::{CardPreset, PaperSize};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    pub paper_size: Option<PaperSize>,
    pub card_preset: Option<CardPreset>,
    pub card_width: Option<f32>,
    pub card_height: Option<f32>,
    pub grid_rows: Option<usize>,
    pub grid_cols: Option<usize>,
    pub show_cut_lines: Option<bool>,
    pub full_page_mode: Option<bool>,
    pub is_imperial: Option<bool>,
}

impl SettingsFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::SettingsFile {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::from_json(&content).map_err(|source| ConfigError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded settings from {}", path.display());
        Ok(file)
    }
}
