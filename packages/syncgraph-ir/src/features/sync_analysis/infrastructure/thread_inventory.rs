//! Thread Inventory Builder
//!
//! Two passes over the whole translation unit:
//! 1. every `pthread_create` call contributes its target function name to a
//!    list seeded with `main`; a thread's base multiplicity is its number of
//!    occurrences in that list
//! 2. every `for`/`while` loop whose rendered body contains both the
//!    creation primitive's name and a thread's name adds one to that thread
//!
//! Pass 2 is a textual over-approximation ("might run more than once"), not
//! an iteration count. Substring matching means a thread named `Work` is
//! also bumped by a loop that only creates `Worker`. `do`/`while` loops are
//! not considered.
//!
//! Loops are found at every depth, so a creation inside two nested loops
//! adds two. This differs from AutoSync tooling that scans only the
//! top-level loops of a function body and would add one.

use std::collections::BTreeMap;
use std::convert::Infallible;
use tracing::debug;

use super::error::{Result, SyncAnalysisError};
use super::expression_resolver::thread_target;
use crate::features::sync_analysis::domain::{SyncPrimitive, ThreadId, ThreadInventory, ENTRY_THREAD};
use crate::shared::models::{walk_unit, AstVisitor, CallExpr, LoopKind, Stmt, TranslationUnit};

#[derive(Debug, Default)]
pub struct ThreadInventoryBuilder;

impl ThreadInventoryBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, unit: &TranslationUnit) -> Result<ThreadInventory> {
        let mut scan = CreationScan {
            threads: vec![ENTRY_THREAD.to_string()],
        };
        walk_unit(&mut scan, unit)?;

        let mut multiplicities: BTreeMap<ThreadId, u32> = BTreeMap::new();
        for thread in &scan.threads {
            *multiplicities.entry(thread.clone()).or_insert(0) += 1;
        }

        let mut loops = LoopScan {
            multiplicities: &mut multiplicities,
        };
        match walk_unit(&mut loops, unit) {
            Ok(()) => {}
            Err(never) => match never {},
        }

        debug!(threads = multiplicities.len(), "thread inventory built");
        Ok(ThreadInventory::new(multiplicities))
    }
}

/// Pass 1: creation targets in source order
struct CreationScan {
    threads: Vec<ThreadId>,
}

impl<'ast> AstVisitor<'ast> for CreationScan {
    type Error = SyncAnalysisError;

    fn visit_call(&mut self, call: &'ast CallExpr) -> Result<()> {
        if call.callee_name() == Some(SyncPrimitive::ThreadCreate.name()) {
            let target = thread_target(call)?;
            debug!(line = call.line, thread = %target, "thread creation");
            self.threads.push(target);
        }
        Ok(())
    }
}

/// Pass 2: loop increments
struct LoopScan<'a> {
    multiplicities: &'a mut BTreeMap<ThreadId, u32>,
}

impl<'ast, 'a> AstVisitor<'ast> for LoopScan<'a> {
    type Error = Infallible;

    fn visit_loop(&mut self, kind: LoopKind, body: &'ast Stmt) -> std::result::Result<(), Infallible> {
        if kind == LoopKind::DoWhile {
            return Ok(());
        }
        let text = body.to_string();
        if !text.contains(SyncPrimitive::ThreadCreate.name()) {
            return Ok(());
        }
        for (thread, multiplicity) in self.multiplicities.iter_mut() {
            if text.contains(thread.as_str()) {
                *multiplicity += 1;
            }
        }
        Ok(())
    }
}
