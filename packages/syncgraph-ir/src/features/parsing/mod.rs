//! Parsing Feature
//!
//! Responsible for obtaining the C translation unit the analyzer consumes.
//!
//! ## Structure
//! - `ports/` - FrontEnd trait
//! - `application/` - ParseFileUseCase, front-end selection by extension
//! - `infrastructure/` - TreeSitterCFrontEnd, JsonTreeFrontEnd

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{front_end_for_path, ParseFileUseCase};

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::{JsonTreeFrontEnd, TreeSitterCFrontEnd};
pub use ports::FrontEnd;
