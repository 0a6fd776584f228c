/// Core synchronization-analysis models
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::models::Line;

/// Entry thread; present even without a creation call
pub const ENTRY_THREAD: &str = "main";

/// Argument position of the intention token in every access primitive
pub const INTENTION_ARG_POSITION: usize = 3;

/// Logical thread name (creation target function, or `main`)
pub type ThreadId = String;

/// Canonical shared-variable name (`x`, `Global->id`, `s.field`)
pub type SharedVariableName = String;

/// Name of the intentions record passed to an access primitive
pub type IntentionToken = String;

// ═══════════════════════════════════════════════════════════════════════════════
// Primitives
// ═══════════════════════════════════════════════════════════════════════════════

/// The fixed synchronization API recognized in C sources
///
/// Serialized as the C callee name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyncPrimitive {
    #[serde(rename = "pthread_create")]
    ThreadCreate,
    #[serde(rename = "iAutoSyncRead")]
    Read,
    #[serde(rename = "iAutoSyncWrite")]
    Write,
    #[serde(rename = "iAutoSyncReadToUpdate")]
    ReadToUpdate,
    #[serde(rename = "iAutoSyncUpdate")]
    Update,
    #[serde(rename = "iAutoSyncProceedOnEvent")]
    ProceedOnEvent,
}

impl SyncPrimitive {
    pub const ALL: [SyncPrimitive; 6] = [
        SyncPrimitive::ThreadCreate,
        SyncPrimitive::Read,
        SyncPrimitive::Write,
        SyncPrimitive::ReadToUpdate,
        SyncPrimitive::Update,
        SyncPrimitive::ProceedOnEvent,
    ];

    /// C callee name (case-sensitive)
    pub fn name(&self) -> &'static str {
        match self {
            SyncPrimitive::ThreadCreate => "pthread_create",
            SyncPrimitive::Read => "iAutoSyncRead",
            SyncPrimitive::Write => "iAutoSyncWrite",
            SyncPrimitive::ReadToUpdate => "iAutoSyncReadToUpdate",
            SyncPrimitive::Update => "iAutoSyncUpdate",
            SyncPrimitive::ProceedOnEvent => "iAutoSyncProceedOnEvent",
        }
    }

    pub fn from_callee(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Access kind for the four data-access primitives
    pub fn access_kind(&self) -> Option<AccessKind> {
        match self {
            SyncPrimitive::Read => Some(AccessKind::Read),
            SyncPrimitive::Write => Some(AccessKind::Write),
            SyncPrimitive::ReadToUpdate => Some(AccessKind::ReadToUpdate),
            SyncPrimitive::Update => Some(AccessKind::Update),
            SyncPrimitive::ThreadCreate | SyncPrimitive::ProceedOnEvent => None,
        }
    }

    /// Arguments the analyzer needs to read from a call
    pub fn min_args(&self) -> usize {
        match self {
            SyncPrimitive::ThreadCreate => 3,
            SyncPrimitive::ProceedOnEvent => 2,
            _ => INTENTION_ARG_POSITION + 1,
        }
    }
}

/// Kind of shared-variable access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessKind {
    Read,
    Write,
    ReadToUpdate,
    Update,
}

impl AccessKind {
    pub const ALL: [AccessKind; 4] = [
        AccessKind::Read,
        AccessKind::Write,
        AccessKind::ReadToUpdate,
        AccessKind::Update,
    ];

    /// Consuming accesses take the shared variable as their second argument
    pub fn is_consuming(&self) -> bool {
        matches!(self, AccessKind::Read | AccessKind::ReadToUpdate)
    }

    pub fn shared_var_position(&self) -> usize {
        if self.is_consuming() {
            1
        } else {
            0
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKind::Read => "Read",
            AccessKind::Write => "Write",
            AccessKind::ReadToUpdate => "ReadToUpdate",
            AccessKind::Update => "Update",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Events and logs
// ═══════════════════════════════════════════════════════════════════════════════

/// One recognized access call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Function whose body contains the call
    pub thread: ThreadId,
    pub kind: AccessKind,
    pub variable: SharedVariableName,
    pub line: Line,
    pub intention: IntentionToken,
}

/// Call-site log entry, serialized as a JSON array
///
/// - `["iAutoSyncRead", "x"]`
/// - `["iAutoSyncProceedOnEvent", "xDone", "P"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallSiteEntry {
    /// Event name and waiting-thread count, verbatim
    EventWait(SyncPrimitive, String, String),
    Access(SyncPrimitive, SharedVariableName),
}

/// Per-function usage record
///
/// Field order matches the sorted key order of the artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadUsage {
    /// Thread multiplicity; 0 for helper functions that are not thread bodies
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Read")]
    pub read: Vec<SharedVariableName>,
    #[serde(rename = "ReadToUpdate")]
    pub read_to_update: Vec<SharedVariableName>,
    #[serde(rename = "Update")]
    pub update: Vec<SharedVariableName>,
    #[serde(rename = "Write")]
    pub write: Vec<SharedVariableName>,
}

impl ThreadUsage {
    pub fn log(&self, kind: AccessKind) -> &[SharedVariableName] {
        match kind {
            AccessKind::Read => &self.read,
            AccessKind::Write => &self.write,
            AccessKind::ReadToUpdate => &self.read_to_update,
            AccessKind::Update => &self.update,
        }
    }

    fn log_mut(&mut self, kind: AccessKind) -> &mut Vec<SharedVariableName> {
        match kind {
            AccessKind::Read => &mut self.read,
            AccessKind::Write => &mut self.write,
            AccessKind::ReadToUpdate => &mut self.read_to_update,
            AccessKind::Update => &mut self.update,
        }
    }

    pub fn record(&mut self, kind: AccessKind, variable: SharedVariableName) {
        self.log_mut(kind).push(variable);
    }

    /// Total recorded accesses over all four kinds
    pub fn access_count(&self) -> usize {
        AccessKind::ALL.iter().map(|k| self.log(*k).len()).sum()
    }

    /// Every variable in any access list (with repeats)
    pub fn variables(&self) -> impl Iterator<Item = &SharedVariableName> {
        AccessKind::ALL.into_iter().flat_map(move |k| self.log(k).iter())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Inventories
// ═══════════════════════════════════════════════════════════════════════════════

/// Thread name → multiplicity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadInventory {
    multiplicities: BTreeMap<ThreadId, u32>,
}

impl ThreadInventory {
    pub fn new(multiplicities: BTreeMap<ThreadId, u32>) -> Self {
        Self { multiplicities }
    }

    pub fn multiplicity(&self, thread: &str) -> Option<u32> {
        self.multiplicities.get(thread).copied()
    }

    pub fn contains(&self, thread: &str) -> bool {
        self.multiplicities.contains_key(thread)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ThreadId, u32)> {
        self.multiplicities.iter().map(|(t, m)| (t, *m))
    }

    pub fn len(&self) -> usize {
        self.multiplicities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multiplicities.is_empty()
    }
}

/// Declared name (arrays as `name[size]`) → type text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableCatalog {
    entries: BTreeMap<String, String>,
}

impl VariableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later declarations with the same key replace earlier ones
    pub fn insert(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        self.entries.insert(name.into(), ty.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared variable → intention tokens in recording order (not deduplicated)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentionTable {
    tokens: BTreeMap<SharedVariableName, Vec<IntentionToken>>,
}

impl IntentionTable {
    pub fn record(&mut self, variable: &str, token: IntentionToken) {
        self.tokens.entry(variable.to_string()).or_default().push(token);
    }

    pub fn tokens(&self, variable: &str) -> Option<&[IntentionToken]> {
        self.tokens.get(variable).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SharedVariableName, &Vec<IntentionToken>)> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
