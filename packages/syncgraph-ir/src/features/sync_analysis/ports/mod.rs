pub mod sync_analyzer_port;

pub use sync_analyzer_port::*;
