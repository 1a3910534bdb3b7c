mod flags;

pub use flags::{format_flags, generate_quality_flags, QualityFlag};
