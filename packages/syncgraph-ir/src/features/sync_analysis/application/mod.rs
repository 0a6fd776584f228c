pub mod analyze_translation_unit;

pub use analyze_translation_unit::*;
