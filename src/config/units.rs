//! Inch/millimeter conversion
//!
//! Paper and card dimensions are held in inches internally. Millimeters only
//! appear at the edges: when card sizes are entered and when values are shown.

use clap::ValueEnum;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

pub fn inch_to_mm(inch: f32) -> f32 {
    inch * MM_PER_INCH
}

pub fn mm_to_inch(mm: f32) -> f32 {
    mm / MM_PER_INCH
}

/// Unit used for user-facing card dimensions
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Unit {
    #[default]
    #[value(name = "in", alias = "inches")]
    Inches,
    #[value(name = "mm", alias = "millimeters")]
    Millimeters,
}

impl Unit {
    /// Convert a value expressed in this unit to inches
    pub fn to_inches(self, value: f32) -> f32 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => mm_to_inch(value),
        }
    }

    /// Convert a value in inches to this unit
    pub fn express(self, inches: f32) -> f32 {
        match self {
            Unit::Inches => inches,
            Unit::Millimeters => inch_to_mm(inches),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
        }
    }
}
