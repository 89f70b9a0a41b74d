use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::config::defaults::*;
use crate::config::Unit;

#[derive(Parser, Debug)]
#[command(name = "card-templater")]
#[command(
    author,
    version,
    about = "Lay out front/back card images onto printable pages with cut marks"
)]
pub struct Args {
    /// Front image files or directories of images
    #[arg(short, long = "front", num_args = 1.., required = true)]
    pub front: Vec<PathBuf>,

    /// Back image files or directories of images
    #[arg(short, long = "back", num_args = 1..)]
    pub back: Vec<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (JSON) applied before command-line options
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Paper size
    #[arg(short, long, value_enum)]
    pub paper: Option<PaperSize>,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    pub orientation: Orientation,

    /// Card size preset
    #[arg(short, long, value_enum)]
    pub card: Option<CardPreset>,

    /// Card width in --units (implies the custom preset)
    #[arg(long)]
    pub card_width: Option<f32>,

    /// Card height in --units (implies the custom preset)
    #[arg(long)]
    pub card_height: Option<f32>,

    /// Unit for card dimensions
    #[arg(short, long, value_enum)]
    pub units: Option<Unit>,

    /// Number of grid rows per page
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of grid columns per page
    #[arg(long)]
    pub cols: Option<usize>,

    /// Pagination mode
    #[arg(short, long, value_enum)]
    pub mode: Option<LayoutMode>,

    /// Omit cut-line tick marks
    #[arg(long)]
    pub no_cut_lines: bool,

    /// Lay out grids that do not fit the paper (negative margins)
    #[arg(long)]
    pub allow_overflow: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Multiply all coordinates by this factor (e.g. 96 for CSS pixels)
    #[arg(long, default_value = "1.0")]
    pub scale: f32,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
    Legal,
    Tabloid,
}

impl PaperSize {
    /// Portrait dimensions in inches (width, height)
    pub fn dimensions_in(&self) -> (f32, f32) {
        match self {
            PaperSize::Letter => LETTER_SIZE,
            PaperSize::A4 => A4_SIZE,
            PaperSize::Legal => LEGAL_SIZE,
            PaperSize::Tabloid => TABLOID_SIZE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Apply this orientation to portrait (width, height)
    pub fn apply(&self, (w, h): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Named card size
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardPreset {
    /// 3.5 x 2 in
    #[default]
    UsBusiness,
    /// 85 x 55 mm
    EuBusiness,
    /// 2.25 x 3.5 in
    Bridge,
    /// 2.5 x 3.5 in
    Poker,
    /// Explicit --card-width/--card-height
    Custom,
}

impl CardPreset {
    /// Card dimensions in inches (width, height), None for custom
    pub fn dimensions_in(&self) -> Option<(f32, f32)> {
        match self {
            CardPreset::UsBusiness => Some(US_BUSINESS_CARD),
            CardPreset::EuBusiness => Some(EU_BUSINESS_CARD),
            CardPreset::Bridge => Some(BRIDGE_CARD),
            CardPreset::Poker => Some(POKER_CARD),
            CardPreset::Custom => None,
        }
    }
}

/// How images are assigned to page slots
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum LayoutMode {
    /// Each image fills every slot of its own page
    #[default]
    FullPage,
    /// Images fill slots in order, front and back pages interleaved
    Ordered,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Layout plan as JSON
    #[default]
    Json,
    /// Human-readable page summary
    Summary,
}

impl Args {
    /// Check if explicit card dimensions were given
    pub fn card_size_overridden(&self) -> bool {
        self.card_width.is_some() || self.card_height.is_some()
    }

    /// Check if cut lines should be shown
    pub fn show_cut_lines(&self) -> bool {
        !self.no_cut_lines
    }
}
