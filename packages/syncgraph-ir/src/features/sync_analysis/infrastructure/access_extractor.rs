//! Access Extractor
//!
//! Visits function bodies and records every synchronization call:
//! - data-access calls go to the function's usage record, the call-site log,
//!   the intention table and the event list
//! - event-wait calls go to the call-site log only
//!
//! Thread bodies are always visited. Other function definitions (helpers
//! that wrap accessor calls) are visited unless disabled, and get their own
//! usage record. Calls nested in call arguments are processed before the
//! enclosing call.

use std::collections::BTreeMap;
use tracing::debug;

use super::error::{Result, SyncAnalysisError};
use super::expression_resolver::{event_wait_operands, intention_token, resolve_access};
use crate::features::sync_analysis::domain::{
    AccessEvent, CallSiteEntry, IntentionTable, SyncPrimitive, ThreadId, ThreadInventory,
    ThreadUsage,
};
use crate::shared::models::{walk_function, AstVisitor, CallExpr, Line, TranslationUnit};

/// Everything recorded by one extraction pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessLog {
    /// Usage records of visited functions (quantities not yet merged)
    pub usage: BTreeMap<ThreadId, ThreadUsage>,
    pub call_sites: BTreeMap<Line, CallSiteEntry>,
    pub intentions: IntentionTable,
    pub events: Vec<AccessEvent>,
}

pub struct AccessExtractor<'a> {
    inventory: &'a ThreadInventory,
    include_helper_functions: bool,
}

impl<'a> AccessExtractor<'a> {
    pub fn new(inventory: &'a ThreadInventory) -> Self {
        Self {
            inventory,
            include_helper_functions: true,
        }
    }

    /// Also visit functions that are not thread bodies
    pub fn with_helper_functions(mut self, enabled: bool) -> Self {
        self.include_helper_functions = enabled;
        self
    }

    pub fn extract(&self, unit: &TranslationUnit) -> Result<AccessLog> {
        let mut log = AccessLog::default();

        for func in unit.functions() {
            let is_thread = self.inventory.contains(&func.name);
            if !is_thread && !self.include_helper_functions {
                continue;
            }
            log.usage.entry(func.name.clone()).or_default();

            let mut visitor = ThreadBodyVisitor {
                thread: &func.name,
                log: &mut log,
            };
            walk_function(&mut visitor, func)?;
        }

        debug!(
            functions = log.usage.len(),
            call_sites = log.call_sites.len(),
            "access extraction complete"
        );
        Ok(log)
    }
}

/// Per-function pass state
struct ThreadBodyVisitor<'a> {
    thread: &'a str,
    log: &'a mut AccessLog,
}

impl<'a> ThreadBodyVisitor<'a> {
    fn record_access(&mut self, call: &CallExpr, primitive: SyncPrimitive) -> Result<()> {
        let kind = primitive
            .access_kind()
            .ok_or_else(|| SyncAnalysisError::UnknownSynchronizationPrimitive {
                name: primitive.name().to_string(),
                line: call.line,
            })?;
        let variable = resolve_access(call, primitive)?;
        let intention = intention_token(call, primitive)?;

        debug!(
            thread = self.thread,
            line = call.line,
            primitive = primitive.name(),
            variable = %variable,
            intention = %intention,
            "shared-variable access"
        );

        self.log
            .usage
            .entry(self.thread.to_string())
            .or_default()
            .record(kind, variable.clone());
        self.log
            .call_sites
            .insert(call.line, CallSiteEntry::Access(primitive, variable.clone()));
        self.log.intentions.record(&variable, intention.clone());
        self.log.events.push(AccessEvent {
            thread: self.thread.to_string(),
            kind,
            variable,
            line: call.line,
            intention,
        });
        Ok(())
    }

    fn record_event_wait(&mut self, call: &CallExpr) -> Result<()> {
        let (event, count) = event_wait_operands(call)?;
        debug!(thread = self.thread, line = call.line, event = %event, "event wait");
        self.log.call_sites.insert(
            call.line,
            CallSiteEntry::EventWait(SyncPrimitive::ProceedOnEvent, event, count),
        );
        Ok(())
    }
}

impl<'ast, 'a> AstVisitor<'ast> for ThreadBodyVisitor<'a> {
    type Error = SyncAnalysisError;

    fn visit_call(&mut self, call: &'ast CallExpr) -> Result<()> {
        let primitive = match call.callee_name().and_then(SyncPrimitive::from_callee) {
            Some(primitive) => primitive,
            None => return Ok(()),
        };
        match primitive {
            SyncPrimitive::ThreadCreate => Ok(()),
            SyncPrimitive::ProceedOnEvent => self.record_event_wait(call),
            SyncPrimitive::Read
            | SyncPrimitive::Write
            | SyncPrimitive::ReadToUpdate
            | SyncPrimitive::Update => self.record_access(call, primitive),
        }
    }
}
