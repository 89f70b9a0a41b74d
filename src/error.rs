use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name}: {value} (must be a positive number)")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("Grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Grid of {rows}x{cols} cards is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("Custom card size needs both --card-width and --card-height")]
    MissingCardSize,

    #[error("Grid {axis} of {required:.3}in exceeds paper {axis} of {available:.3}in")]
    GridOverflow {
        axis: &'static str,
        required: f32,
        available: f32,
    },

    #[error("Failed to read settings file {}: {source}", path.display())]
    SettingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
