//! Report Assembler
//!
//! Merges thread multiplicities into the usage records (threads without a
//! definition get an empty record) and flattens the accessed variables.

use std::collections::BTreeSet;

use super::access_extractor::AccessLog;
use super::dependency_extractor::DependencyInfo;
use crate::features::sync_analysis::domain::{
    SharedVariableName, SyncReport, ThreadInventory, VariableCatalog,
};

#[derive(Debug, Default)]
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        inventory: &ThreadInventory,
        catalog: VariableCatalog,
        log: AccessLog,
        dependencies: DependencyInfo,
    ) -> SyncReport {
        let AccessLog {
            mut usage,
            call_sites,
            events,
            ..
        } = log;

        for (thread, multiplicity) in inventory.iter() {
            usage.entry(thread.clone()).or_default().quantity = multiplicity;
        }

        let shared_variables: BTreeSet<SharedVariableName> = usage
            .values()
            .flat_map(|record| record.variables().cloned())
            .collect();

        SyncReport {
            usage,
            catalog,
            call_sites,
            dependencies: dependencies.dependencies,
            constant_init: dependencies.constant_init,
            shared_variables,
            events,
            notes: dependencies.notes,
        }
    }
}
