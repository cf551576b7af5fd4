pub const PRIZE_CONFIG_ELEMENT_ID: &str = "prize-config";

pub const RESULT_PREFIX: &str = "You won: ";
pub const SPIN_FAILED_ERROR: &str = "The wheel could not be spun. Please reload the page";
pub const CONFIG_ERROR: &str = "The prize list is not valid";

pub const DEFAULT_SPIN_DURATION_MS: f64 = 8000.0;
pub const DEFAULT_MIN_SPIN_DEGREES: f64 = 2880.0; // 8 full turns
pub const MIN_SPIN_DEGREES_FLOOR: f64 = 720.0; // 2 full turns
pub const PERCENT_SUM_TOLERANCE: f64 = 0.01;

// Drawing constants
pub const LABEL_COLOR: &str = "#fff";
pub const LABEL_FONT_FAMILY: &str = "Arial";
pub const LABEL_INSET: f64 = 30.0;
pub const LABEL_BASELINE_OFFSET: f64 = 8.0;
pub const CENTER_DOT_COLOR: &str = "rgba(0,0,0,0.25)";
pub const POINTER_COLOR: &str = "#e91e63";
pub const POINTER_BASE_GAP: f64 = 15.0;
