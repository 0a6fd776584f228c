//! Intention Conflict Checker
//!
//! Every access to a shared variable must carry the same intention token.
//! A consistent list collapses to its single token.

use std::collections::BTreeMap;

use super::error::{Result, SyncAnalysisError};
use crate::features::sync_analysis::domain::{IntentionTable, IntentionToken, SharedVariableName};
use crate::shared::utils::dedup_preserving_order;

/// True iff every token equals the first
pub fn is_plausible(tokens: &[IntentionToken]) -> bool {
    match tokens.split_first() {
        Some((first, rest)) => rest.iter().all(|t| t == first),
        None => true,
    }
}

/// Collapse each variable's token list, failing on the first conflict
///
/// Variables are checked in name order; the error lists the distinct tokens
/// in the order they were first recorded.
pub fn check(table: &IntentionTable) -> Result<BTreeMap<SharedVariableName, IntentionToken>> {
    let mut resolved = BTreeMap::new();
    for (variable, tokens) in table.iter() {
        if !is_plausible(tokens) {
            return Err(SyncAnalysisError::ConflictingIntentions {
                variable: variable.clone(),
                tokens: dedup_preserving_order(tokens.iter().cloned()),
            });
        }
        if let Some(token) = tokens.first() {
            resolved.insert(variable.clone(), token.clone());
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> IntentionTable {
        let mut table = IntentionTable::default();
        for (variable, token) in entries {
            table.record(variable, token.to_string());
        }
        table
    }

    #[test]
    fn test_identical_tokens_collapse() {
        let resolved = check(&table(&[
            ("shared", "ownerA"),
            ("shared", "ownerA"),
            ("N", "xIntentionN"),
        ]))
        .unwrap();

        assert_eq!(resolved["shared"], "ownerA");
        assert_eq!(resolved["N"], "xIntentionN");
    }

    #[test]
    fn test_conflict_names_exactly_the_tokens() {
        let err = check(&table(&[
            ("shared", "ownerA"),
            ("shared", "ownerB"),
            ("shared", "ownerA"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            SyncAnalysisError::ConflictingIntentions {
                variable: "shared".to_string(),
                tokens: vec!["ownerA".to_string(), "ownerB".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_list_is_plausible() {
        assert!(is_plausible(&[]));
        assert!(check(&IntentionTable::default()).unwrap().is_empty());
    }
}
