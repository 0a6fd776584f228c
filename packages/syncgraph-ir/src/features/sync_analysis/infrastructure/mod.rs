/// Synchronization Analysis Infrastructure
pub mod access_extractor;
pub mod dependency_extractor;
pub mod error;
pub mod expression_resolver;
pub mod intention_checker;
pub mod report_assembler;
pub mod thread_inventory;
pub mod variable_catalog;

pub use access_extractor::*;
pub use dependency_extractor::*;
pub use error::*;
pub use expression_resolver::{
    event_wait_operands, intention_token, resolve, resolve_access, resolve_dependency,
    thread_target, ExpressionShape, ResolvedVariable,
};
pub use intention_checker::{check as check_intentions, is_plausible};
pub use report_assembler::*;
pub use thread_inventory::*;
pub use variable_catalog::*;
