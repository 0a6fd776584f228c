//! Custom assertions for test verification

use std::collections::BTreeMap;
use std::convert::Infallible;

use syncgraph_ir::features::sync_analysis::{SyncPrimitive, SyncReport};
use syncgraph_ir::shared::models::{walk_function, AstVisitor, CallExpr, TranslationUnit};

/// Data-access calls per function, counted straight from the tree
pub fn count_access_calls(unit: &TranslationUnit) -> BTreeMap<String, usize> {
    struct Counter(usize);

    impl<'ast> AstVisitor<'ast> for Counter {
        type Error = Infallible;

        fn visit_call(&mut self, call: &'ast CallExpr) -> Result<(), Infallible> {
            let is_access = call
                .callee_name()
                .and_then(SyncPrimitive::from_callee)
                .is_some_and(|p| p.access_kind().is_some());
            if is_access {
                self.0 += 1;
            }
            Ok(())
        }
    }

    unit.functions()
        .map(|func| {
            let mut counter = Counter(0);
            if let Err(never) = walk_function(&mut counter, func) {
                match never {}
            }
            (func.name.clone(), counter.0)
        })
        .collect()
}

/// Assert that a function's usage record carries the given multiplicity
pub fn assert_quantity(report: &SyncReport, thread: &str, expected: u32) {
    let usage = report
        .usage
        .get(thread)
        .unwrap_or_else(|| panic!("no usage record for {thread}. Records: {:?}", report.usage.keys()));
    assert_eq!(
        usage.quantity, expected,
        "Expected {thread} to have Quantity {expected}, got {}",
        usage.quantity
    );
}

/// Assert the dependency list and constant flag of one shared variable
pub fn assert_dependencies(report: &SyncReport, variable: &str, deps: &[&str], constant: bool) {
    let actual = report
        .dependencies
        .get(variable)
        .unwrap_or_else(|| panic!("no dependency entry for {variable}"));
    assert_eq!(actual, &deps.iter().map(|d| d.to_string()).collect::<Vec<_>>());
    assert_eq!(
        report.constant_init.get(variable),
        Some(&constant),
        "constant flag of {variable}"
    );
}
