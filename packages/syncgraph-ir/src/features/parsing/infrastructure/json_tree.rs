//! JSON tree front end
//!
//! Reads a `TranslationUnit` serialized by an external C front end. Node
//! objects are tagged with `"kind"` (see `shared::models::c_ast`).

use tracing::debug;

use crate::errors::{Result, SyncGraphError};
use crate::features::parsing::ports::FrontEnd;
use crate::shared::models::TranslationUnit;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTreeFrontEnd;

impl JsonTreeFrontEnd {
    pub fn new() -> Self {
        Self
    }
}

impl FrontEnd for JsonTreeFrontEnd {
    fn parse(&self, source: &str, file_path: &str) -> Result<TranslationUnit> {
        let mut unit: TranslationUnit = serde_json::from_str(source).map_err(|e| {
            SyncGraphError::parse(format!("{}: invalid JSON tree: {}", file_path, e))
        })?;
        if unit.file_path.is_empty() {
            unit.file_path = file_path.to_string();
        }
        debug!(file = file_path, items = unit.items.len(), "JSON tree loaded");
        Ok(unit)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("json")
    }

    fn name(&self) -> &'static str {
        "json-tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{CType, Decl, ExternalDecl};

    #[test]
    fn test_round_trip_through_front_end() {
        let unit = TranslationUnit::new(
            "",
            vec![ExternalDecl::Declaration(Decl::new("shared", CType::named("int"), 1))],
        );
        let json = serde_json::to_string(&unit).unwrap();

        let parsed = JsonTreeFrontEnd::new().parse(&json, "tree.json").unwrap();
        assert_eq!(parsed.items, unit.items);
        assert_eq!(parsed.file_path, "tree.json");
    }

    #[test]
    fn test_parses_hand_written_tree() {
        let json = r#"{
            "file_path": "demo.c",
            "items": [
                {"kind": "function", "name": "main",
                 "return_type": {"kind": "named", "names": ["int"]},
                 "body": [
                    {"kind": "expr", "expr": {"kind": "call", "line": 4,
                        "callee": {"kind": "identifier", "name": "iAutoSyncWrite"},
                        "args": [
                            {"kind": "unary", "op": "&", "operand": {"kind": "identifier", "name": "x"}},
                            {"kind": "identifier", "name": "src"},
                            {"kind": "constant", "value": "4"},
                            {"kind": "identifier", "name": "xIntentionX"}
                        ]}}
                 ],
                 "line": 2}
            ]
        }"#;

        let unit = JsonTreeFrontEnd::new().parse(json, "demo.json").unwrap();
        assert_eq!(unit.file_path, "demo.c");
        assert_eq!(unit.functions().count(), 1);
    }

    #[test]
    fn test_rejects_malformed_tree() {
        let err = JsonTreeFrontEnd::new()
            .parse(r#"{"items": [{"kind": "nonsense"}]}"#, "bad.json")
            .unwrap_err();
        assert!(matches!(err, SyncGraphError::Parse(_)));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_extension() {
        let front_end = JsonTreeFrontEnd::new();
        assert!(front_end.supports_extension("json"));
        assert!(!front_end.supports_extension("c"));
    }
}
