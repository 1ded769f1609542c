//! Anthropometric ratios, guideline offsets and page defaults

/// Arm length estimate as a fraction of standing height
pub const ARM_LENGTH_RATIO: f64 = 0.40;

/// Sitting eye height estimate as a fraction of standing height
pub const SITTING_EYE_HEIGHT_RATIO: f64 = 0.82;

/// Standing height divided by this gives the sitting desk height
pub const SITTING_DESK_DIVISOR: f64 = 2.48;

/// Alternative sitting desk formula: `height * ratio + offset`
pub const SITTING_DESK_ALT_RATIO: f64 = 0.25;
pub const SITTING_DESK_ALT_OFFSET: f64 = 3.5;

/// Standing height divided by this gives the standing desk height
pub const STANDING_DESK_DIVISOR: f64 = 1.58;

/// Alternative standing desk formula: `height * ratio - offset`
pub const STANDING_DESK_ALT_RATIO: f64 = 0.58;
pub const STANDING_DESK_ALT_OFFSET: f64 = 4.0;

/// Distance between desk surface and chair seat
pub const DESK_TO_SEAT_DROP: f64 = 28.0;

/// Monitor distance as multiples of arm length
pub const MONITOR_DISTANCE_MIN_RATIO: f64 = 0.75;
pub const MONITOR_DISTANCE_MAX_RATIO: f64 = 1.05;
pub const MONITOR_DISTANCE_OPTIMAL_RATIO: f64 = 0.90;

/// Screen center sits this far below eye level
pub const MONITOR_CENTER_DROP: f64 = 10.0;

/// Keyboard sits this far below the sitting desk height
pub const KEYBOARD_DROP: f64 = 2.0;

/// Comfort adjustment range (± cm) around the sitting desk height
pub const SITTING_DESK_TOLERANCE: f64 = 2.0;

/// Comfort adjustment range (± cm) around the standing desk height
pub const STANDING_DESK_TOLERANCE: f64 = 3.0;

/// ANSI bounds on eye-to-screen distance, in cm
pub const ANSI_MIN_MONITOR_DISTANCE: f64 = 50.0;
pub const ANSI_MAX_MONITOR_DISTANCE: f64 = 100.0;

/// Distance from the front desk edge to the keyboard, in cm
pub const KEYBOARD_EDGE_OFFSET: f64 = 5.0;

/// Standing height used when none is supplied
pub const DEFAULT_STANDING_HEIGHT: f64 = 183.0;

/// Standard A4 page width in points
pub const A4_WIDTH: f32 = 595.0;

/// Standard A4 page height in points
pub const A4_HEIGHT: f32 = 842.0;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Average character width as a fraction of font size
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default line height multiplier
pub const DEFAULT_LINE_HEIGHT_MULTIPLIER: f32 = 1.2;

/// Resource names of the report fonts
pub const REGULAR_FONT_KEY: &str = "F1";
pub const BOLD_FONT_KEY: &str = "F1-Bold";
