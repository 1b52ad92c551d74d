pub mod option_panel;
pub mod result_modal;
pub mod spin_button;
pub mod spinner_wheel;
pub mod theme_toggle;

pub use option_panel::OptionPanel;
pub use result_modal::ResultModal;
pub use spin_button::SpinButton;
pub use spinner_wheel::SpinnerWheel;
pub use theme_toggle::ThemeToggle;
