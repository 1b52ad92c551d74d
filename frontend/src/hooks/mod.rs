pub mod use_spinner;
pub mod use_theme;

pub use use_spinner::*;
pub use use_theme::*;
