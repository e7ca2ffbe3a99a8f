//! Terminal output components: theme, status icons, and spinners.

pub mod spinner;
pub mod status;
pub mod theme;

pub use spinner::ProgressSpinner;
pub use status::StatusKind;
pub use theme::{should_use_colors, Theme};
