//! Defaults and safety limits

/// Default width of the repeating unit
pub const DEFAULT_PART_SIZE: usize = 100;

/// Default depth assigned to a full-brightness pixel
pub const DEFAULT_MAX_DEPTH: i64 = 40;

// Guards part-size resolution against infinite patterns, whose reported
// width is a sentinel rather than a usable repeat unit
/// Largest accepted repeat-unit width
pub const MAX_PART_SIZE: usize = 65_536;

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_sirds";

/// Extensions accepted when collecting depth-map images from a directory
pub const INPUT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];
