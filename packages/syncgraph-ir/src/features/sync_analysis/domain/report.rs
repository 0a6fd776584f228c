//! Analysis report
//!
//! The serialized artifact is a five-element JSON array, in this order:
//! 1. per-thread usage records
//! 2. variable catalog
//! 3. call-site log keyed by line
//! 4. dependency map
//! 5. constant-initialized-by-main flags
//!
//! Every map is a `BTreeMap`, so keys come out sorted and repeated runs over
//! the same tree produce byte-identical output.

use serde::ser::Error as _;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::models::{
    AccessEvent, CallSiteEntry, IntentionToken, SharedVariableName, ThreadId, ThreadUsage,
    VariableCatalog,
};
use crate::shared::models::Line;

/// Default output indentation (spaces)
pub const DEFAULT_INDENT: usize = 2;

/// Why a variable ended up with an empty dependency set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteReason {
    /// No file-scope declaration carries the intention's name
    MissingDeclaration,
    /// The intentions record is declared without an initializer
    MissingInitializer,
}

/// Informational (non-fatal) finding of dependency extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNote {
    pub variable: SharedVariableName,
    pub intention: IntentionToken,
    pub reason: NoteReason,
}

impl fmt::Display for DependencyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            NoteReason::MissingDeclaration => write!(
                f,
                "no intentions record named {} is declared (used by {})",
                self.intention, self.variable
            ),
            NoteReason::MissingInitializer => write!(
                f,
                "no intention has been specified for {} (used by {})",
                self.intention, self.variable
            ),
        }
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Function name → usage record (threads carry their multiplicity)
    pub usage: BTreeMap<ThreadId, ThreadUsage>,
    pub catalog: VariableCatalog,
    /// At most one entry per line; a later call on the same line wins
    pub call_sites: BTreeMap<Line, CallSiteEntry>,
    pub dependencies: BTreeMap<SharedVariableName, Vec<SharedVariableName>>,
    pub constant_init: BTreeMap<SharedVariableName, bool>,

    // Not part of the artifact
    /// Every variable appearing in any usage record
    pub shared_variables: BTreeSet<SharedVariableName>,
    /// Access events in extraction order
    pub events: Vec<AccessEvent>,
    pub notes: Vec<DependencyNote>,
}

type ArtifactRef<'a> = (
    &'a BTreeMap<ThreadId, ThreadUsage>,
    &'a VariableCatalog,
    &'a BTreeMap<Line, CallSiteEntry>,
    &'a BTreeMap<SharedVariableName, Vec<SharedVariableName>>,
    &'a BTreeMap<SharedVariableName, bool>,
);

type ArtifactOwned = (
    BTreeMap<ThreadId, ThreadUsage>,
    VariableCatalog,
    BTreeMap<Line, CallSiteEntry>,
    BTreeMap<SharedVariableName, Vec<SharedVariableName>>,
    BTreeMap<SharedVariableName, bool>,
);

impl SyncReport {
    /// Number of recognized call sites (entries of the call-site log)
    pub fn call_site_count(&self) -> usize {
        self.call_sites.len()
    }

    /// Recorded accesses per function
    pub fn access_counts(&self) -> BTreeMap<ThreadId, usize> {
        self.usage
            .iter()
            .map(|(thread, usage)| (thread.clone(), usage.access_count()))
            .collect()
    }

    fn artifact(&self) -> ArtifactRef<'_> {
        (
            &self.usage,
            &self.catalog,
            &self.call_sites,
            &self.dependencies,
            &self.constant_init,
        )
    }

    /// Serialize the artifact with the default two-space indent
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.to_json_with_indent(DEFAULT_INDENT)
    }

    pub fn to_json_with_indent(&self, indent: usize) -> serde_json::Result<String> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.artifact().serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    /// Re-read a serialized artifact
    ///
    /// Only the five artifact parts are restored; `shared_variables` is
    /// recomputed from the usage records, events and notes stay empty.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let (usage, catalog, call_sites, dependencies, constant_init): ArtifactOwned =
            serde_json::from_str(json)?;
        let shared_variables = usage
            .values()
            .flat_map(|u| u.variables().cloned())
            .collect();
        Ok(Self {
            usage,
            catalog,
            call_sites,
            dependencies,
            constant_init,
            shared_variables,
            events: Vec::new(),
            notes: Vec::new(),
        })
    }
}
