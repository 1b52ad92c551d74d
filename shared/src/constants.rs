pub const OPTIONS_STORAGE_KEY: &str = "decision-spinner-options";
pub const THEME_STORAGE_KEY: &str = "theme";

// Must match the CSS transition duration on the wheel.
pub const SPIN_DURATION_MS: u32 = 5000;
pub const EXTRA_TURNS: u32 = 8;
pub const MIN_OPTIONS_TO_SPIN: usize = 2;

pub const LABEL_MAX_CHARS: usize = 12;

pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FED766", "#2AB7CA",
    "#F0B86E", "#F47A60", "#8A6F9E", "#3D405B", "#E07A5F",
];

pub const EMPTY_WHEEL_BACKGROUND: &str = "conic-gradient(#eee 0deg 360deg)";
