/// Synchronization Analysis Domain Models
pub mod models;
pub mod report;

pub use models::*;
pub use report::*;
