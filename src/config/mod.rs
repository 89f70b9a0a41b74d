pub mod defaults;
pub mod file;
pub mod settings;
pub mod units;

pub use file::SettingsFile;
pub use settings::Settings;
pub use units::{inch_to_mm, mm_to_inch, Unit, MM_PER_INCH};
