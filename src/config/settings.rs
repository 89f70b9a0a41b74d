use crate::cli::{Args, CardPreset, LayoutMode, Orientation, PaperSize};
use crate::error::ConfigError;
use crate::layout::compute_margins;
use crate::model::Margins;

use super::defaults::*;
use super::file::SettingsFile;
use super::units::Unit;

/// Slack for float comparisons when checking that the grid fits the paper
const FIT_TOLERANCE: f32 = 1e-4;

/// Settings for one layout run. All lengths are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // Paper
    pub paper_width: f32,
    pub paper_height: f32,
    /// Named paper size, None when dimensions were given directly
    pub paper_size: Option<PaperSize>,
    pub orientation: Orientation,

    // Cards and grid
    pub card_width: f32,
    pub card_height: f32,
    pub card_preset: CardPreset,
    pub grid_rows: usize,
    pub grid_cols: usize,

    // Output options
    pub show_cut_lines: bool,
    pub mode: LayoutMode,

    /// Unit card dimensions are entered and displayed in
    pub display_unit: Unit,
}

impl Default for Settings {
    fn default() -> Self {
        let (paper_width, paper_height) = LETTER_SIZE;
        let (card_width, card_height) = US_BUSINESS_CARD;

        Self {
            paper_width,
            paper_height,
            paper_size: Some(PaperSize::Letter),
            orientation: Orientation::Portrait,

            card_width,
            card_height,
            card_preset: CardPreset::UsBusiness,
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,

            show_cut_lines: true,
            mode: LayoutMode::FullPage,

            display_unit: Unit::Inches,
        }
    }
}

impl Settings {
    /// Create settings from raw dimensions (inches)
    pub fn new(
        paper_width: f32,
        paper_height: f32,
        card_width: f32,
        card_height: f32,
        grid_rows: usize,
        grid_cols: usize,
    ) -> Self {
        Self {
            paper_width,
            paper_height,
            paper_size: None,
            card_width,
            card_height,
            card_preset: CardPreset::Custom,
            grid_rows,
            grid_cols,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cut_lines(mut self, show: bool) -> Self {
        self.show_cut_lines = show;
        self
    }

    /// Select a named paper size in the current orientation
    pub fn with_paper(mut self, paper: PaperSize) -> Self {
        self.paper_size = Some(paper);
        self.apply_paper_size();
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.apply_paper_size();
        self
    }

    /// Select a card preset; `Custom` keeps the current card dimensions
    pub fn with_card_preset(mut self, preset: CardPreset) -> Self {
        self.card_preset = preset;
        if let Some((w, h)) = preset.dimensions_in() {
            self.card_width = w;
            self.card_height = h;
        }
        self
    }

    /// Create settings from CLI arguments, reading `--settings` first if given
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let settings = match args.settings {
            Some(ref path) => Self::default().with_file(&SettingsFile::load(path)?),
            None => Self::default(),
        };
        settings.with_args(args)
    }

    /// Merge values from a settings file
    pub fn with_file(mut self, file: &SettingsFile) -> Self {
        if let Some(paper) = file.paper_size {
            self = self.with_paper(paper);
        }

        if let Some(preset) = file.card_preset {
            self = self.with_card_preset(preset);
        }

        // Saved dimensions are what the layout actually used, even with a preset
        if let Some(w) = file.card_width {
            self.card_width = w;
        }
        if let Some(h) = file.card_height {
            self.card_height = h;
        }

        if let Some(rows) = file.grid_rows {
            self.grid_rows = rows;
        }
        if let Some(cols) = file.grid_cols {
            self.grid_cols = cols;
        }
        if let Some(show) = file.show_cut_lines {
            self.show_cut_lines = show;
        }
        if let Some(full_page) = file.full_page_mode {
            self.mode = if full_page {
                LayoutMode::FullPage
            } else {
                LayoutMode::Ordered
            };
        }
        if let Some(imperial) = file.is_imperial {
            self.display_unit = if imperial {
                Unit::Inches
            } else {
                Unit::Millimeters
            };
        }

        self
    }

    /// Apply explicit command-line options on top of the current values.
    ///
    /// `--card custom` has no dimensions of its own, so it must come with both
    /// `--card-width` and `--card-height`.
    pub fn with_args(mut self, args: &Args) -> Result<Self, ConfigError> {
        if let Some(unit) = args.units {
            self.display_unit = unit;
        }

        self.orientation = args.orientation;
        if let Some(paper) = args.paper {
            self.paper_size = Some(paper);
        }
        self.apply_paper_size();

        if let Some(preset) = args.card {
            if preset == CardPreset::Custom
                && (args.card_width.is_none() || args.card_height.is_none())
            {
                return Err(ConfigError::MissingCardSize);
            }
            self = self.with_card_preset(preset);
        }

        // Explicit dimensions are in the display unit and switch to a custom card
        if args.card_size_overridden() {
            self.card_preset = CardPreset::Custom;
        }
        if let Some(w) = args.card_width {
            self.card_width = self.display_unit.to_inches(w);
        }
        if let Some(h) = args.card_height {
            self.card_height = self.display_unit.to_inches(h);
        }

        if let Some(rows) = args.rows {
            self.grid_rows = rows;
        }
        if let Some(cols) = args.cols {
            self.grid_cols = cols;
        }
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if !args.show_cut_lines() {
            self.show_cut_lines = false;
        }

        Ok(self)
    }

    fn apply_paper_size(&mut self) {
        if let Some(paper) = self.paper_size {
            let (w, h) = self.orientation.apply(paper.dimensions_in());
            self.paper_width = w;
            self.paper_height = h;
        }
    }

    /// Check the settings before layout.
    ///
    /// Grids larger than the paper are rejected unless `allow_overflow` is set,
    /// in which case they are laid out with negative margins.
    pub fn validate(&self, allow_overflow: bool) -> Result<(), ConfigError> {
        for (name, value) in [
            ("paper width", self.paper_width),
            ("paper height", self.paper_height),
            ("card width", self.card_width),
            ("card height", self.card_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        match self.grid_rows.checked_mul(self.grid_cols) {
            Some(0) => {
                return Err(ConfigError::EmptyGrid {
                    rows: self.grid_rows,
                    cols: self.grid_cols,
                })
            }
            None => {
                return Err(ConfigError::GridTooLarge {
                    rows: self.grid_rows,
                    cols: self.grid_cols,
                })
            }
            Some(_) => {}
        }

        let overflow = [
            ("width", self.grid_width(), self.paper_width),
            ("height", self.grid_height(), self.paper_height),
        ]
        .into_iter()
        .find(|(_, required, available)| *required > *available + FIT_TOLERANCE);

        if let Some((axis, required, available)) = overflow {
            if !allow_overflow {
                return Err(ConfigError::GridOverflow {
                    axis,
                    required,
                    available,
                });
            }
            log::warn!(
                "Grid {} {:.3}in exceeds paper {} {:.3}in; margins will be negative",
                axis,
                required,
                axis,
                available
            );
        }

        Ok(())
    }

    /// Centering margins for the grid
    pub fn margins(&self) -> Margins {
        compute_margins(
            self.paper_width,
            self.paper_height,
            self.card_width,
            self.card_height,
            self.grid_rows,
            self.grid_cols,
        )
    }

    /// Slots per page, saturating for grids `validate` rejects as too large
    pub fn cards_per_page(&self) -> usize {
        self.grid_rows.saturating_mul(self.grid_cols)
    }

    /// Total width of the card grid
    pub fn grid_width(&self) -> f32 {
        self.grid_cols as f32 * self.card_width
    }

    /// Total height of the card grid
    pub fn grid_height(&self) -> f32 {
        self.grid_rows as f32 * self.card_height
    }
}
