// End-to-end tests: C text → tree-sitter front end → analysis → artifact

mod common;
use common::{
    assert_dependencies, assert_quantity, fixture_fft_pipeline, fixture_fft_pipeline_conflicting,
    fixture_legacy_three_argument_call, fixture_shared_counter, fixture_worker_creation,
};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use syncgraph_ir::config::AnalysisConfig;
use syncgraph_ir::features::sync_analysis::{
    CallSiteEntry, NoteReason, SyncAnalysisError, SyncPrimitive, ThreadUsage,
};
use syncgraph_ir::pipeline::SyncPipeline;
use syncgraph_ir::{SyncGraphError, SyncReport};

fn analyze_c(source: &str) -> Result<SyncReport, SyncGraphError> {
    let pipeline = SyncPipeline::for_path(Path::new("input.c"), AnalysisConfig::default());
    pipeline.process(source, "input.c").map(|result| result.report)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Shared counter scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_consistent_intention_reports_usage_and_note() {
    let report = analyze_c(&fixture_shared_counter("ownerA", None)).unwrap();

    assert_eq!(
        report.usage["T1"],
        ThreadUsage {
            quantity: 1,
            read: strings(&["shared"]),
            write: strings(&["shared"]),
            ..Default::default()
        }
    );
    assert_dependencies(&report, "shared", &[], false);

    assert_eq!(report.notes.len(), 1);
    assert_eq!(report.notes[0].intention, "ownerA");
    assert_eq!(report.notes[0].reason, NoteReason::MissingInitializer);
}

#[test]
fn test_same_intention_in_main_is_accepted() {
    let report = analyze_c(&fixture_shared_counter("ownerA", Some("ownerA"))).unwrap();

    assert_eq!(report.usage["main"].write, strings(&["shared"]));
    assert_eq!(report.call_site_count(), 3);
}

#[test]
fn test_conflicting_intention_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("counter.c");
    let output = dir.path().join("parser_out.json");
    fs::write(&input, fixture_shared_counter("ownerA", Some("ownerB"))).unwrap();

    let config = AnalysisConfig::default().with_output_path(&output);
    let err = SyncPipeline::for_path(&input, config).run(&input).unwrap_err();

    match err {
        SyncGraphError::Analysis(SyncAnalysisError::ConflictingIntentions { variable, tokens }) => {
            assert_eq!(variable, "shared");
            assert_eq!(tokens, strings(&["ownerA", "ownerB"]));
        }
        other => panic!("expected ConflictingIntentions, got {other:?}"),
    }
    assert!(!output.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// Thread multiplicity
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_thread_created_once_has_quantity_one() {
    let report = analyze_c(&fixture_worker_creation(false)).unwrap();
    assert_quantity(&report, "Worker", 1);
    assert_quantity(&report, "main", 1);
}

#[test]
fn test_thread_created_in_loop_has_quantity_two() {
    let report = analyze_c(&fixture_worker_creation(true)).unwrap();
    assert_quantity(&report, "Worker", 2);
    assert_eq!(report.usage["Worker"].update, strings(&["counter"]));
}

// ═══════════════════════════════════════════════════════════════════════════
// FFT program
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fft_usage_records() {
    let report = analyze_c(&fixture_fft_pipeline()).unwrap();

    assert_eq!(
        report.usage.keys().cloned().collect::<Vec<_>>(),
        strings(&["SlaveStart", "main", "vTranspose"])
    );
    assert_eq!(
        report.usage["main"],
        ThreadUsage {
            quantity: 1,
            write: strings(&["M", "N"]),
            ..Default::default()
        }
    );
    assert_eq!(
        report.usage["SlaveStart"],
        ThreadUsage {
            quantity: 2,
            read: strings(&["N", "x"]),
            read_to_update: strings(&["rootN"]),
            update: strings(&["rootN"]),
            write: strings(&["Global->transtimes"]),
        }
    );
    assert_eq!(
        report.usage["vTranspose"],
        ThreadUsage {
            quantity: 0,
            write: strings(&["x"]),
            ..Default::default()
        }
    );
}

#[test]
fn test_fft_dependencies() {
    let report = analyze_c(&fixture_fft_pipeline()).unwrap();

    assert_dependencies(&report, "M", &[], true);
    assert_dependencies(&report, "N", &["M"], true);
    assert_dependencies(&report, "rootN", &["N"], true);
    assert_dependencies(&report, "x", &["N", "rootN"], false);
    assert_dependencies(&report, "Global->transtimes", &["Global->totaltimes"], false);
    assert!(report.notes.is_empty());
}

#[test]
fn test_fft_call_sites_and_catalog() {
    let report = analyze_c(&fixture_fft_pipeline()).unwrap();

    assert_eq!(report.call_site_count(), 9);
    assert_eq!(
        report.call_sites[&47],
        CallSiteEntry::EventWait(
            SyncPrimitive::ProceedOnEvent,
            "xFFTDone".to_string(),
            "P".to_string()
        )
    );
    assert_eq!(
        report.call_sites[&64],
        CallSiteEntry::Access(SyncPrimitive::Write, "Global->transtimes".to_string())
    );
    assert!(!report.call_sites.contains_key(&43));

    assert_eq!(report.catalog.get("N"), Some("uint32_t"));
    assert_eq!(report.catalog.get("handles[P]"), Some("pthread_t"));
    assert_eq!(report.catalog.get("xIntentionN"), Some("xAutoSyncIntentions"));
    assert_eq!(report.catalog.get("x"), None);
}

#[test]
fn test_fft_conflict_names_both_intentions() {
    let err = analyze_c(&fixture_fft_pipeline_conflicting()).unwrap_err();
    assert!(matches!(
        err,
        SyncGraphError::Analysis(SyncAnalysisError::ConflictingIntentions { ref variable, ref tokens })
            if variable == "x" && *tokens == strings(&["xIntentionX", "xNoSpecialIntention"])
    ));
}

#[test]
fn test_fft_without_helpers() {
    let config = AnalysisConfig::default().with_helper_functions(false);
    let pipeline = SyncPipeline::for_path(Path::new("fft.c"), config);
    let report = pipeline.process(&fixture_fft_pipeline(), "fft.c").unwrap().report;

    assert!(!report.usage.contains_key("vTranspose"));
    assert_eq!(report.call_site_count(), 8);
}

#[test]
fn test_fft_artifact_is_deterministic() {
    let pipeline = SyncPipeline::for_path(Path::new("fft.c"), AnalysisConfig::default());
    let first = pipeline.process(&fixture_fft_pipeline(), "fft.c").unwrap();
    let second = pipeline.process(&fixture_fft_pipeline(), "fft.c").unwrap();
    assert_eq!(first.artifact, second.artifact);
}

// ═══════════════════════════════════════════════════════════════════════════
// Fatal input
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_intention_argument_is_fatal() {
    let err = analyze_c(&fixture_legacy_three_argument_call()).unwrap_err();
    assert!(matches!(
        err,
        SyncGraphError::Analysis(SyncAnalysisError::MissingArgument {
            expected: 4,
            found: 3,
            line: 6,
            ..
        })
    ));
}

#[test]
fn test_unrecognized_shared_variable_shape_is_fatal() {
    let source = "int *p;\nint main(void)\n{\n  int v;\n  iAutoSyncWrite(p + 1, &v, sizeof(v), xI);\n  return 0;\n}\n";
    let err = analyze_c(source).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("line 5"), "{message}");
    assert!(message.contains("p + 1"), "{message}");
}

#[test]
fn test_event_wait_operands_are_written_as_in_source() {
    let source = "#define NO_OF_THREADS 4\nint main(void)\n{\n  iAutoSyncProceedOnEvent(xDone, NO_OF_THREADS - 1);\n  iAutoSyncProceedOnEvent(xAll, sizeof(int) * 2);\n  return 0;\n}\n";
    let report = analyze_c(source).unwrap();

    assert_eq!(
        report.call_sites[&4],
        CallSiteEntry::EventWait(
            SyncPrimitive::ProceedOnEvent,
            "xDone".to_string(),
            "NO_OF_THREADS - 1".to_string()
        )
    );
    assert_eq!(
        report.call_sites[&5],
        CallSiteEntry::EventWait(
            SyncPrimitive::ProceedOnEvent,
            "xAll".to_string(),
            "sizeof(int) * 2".to_string()
        )
    );
}

#[test]
fn test_parameters_are_not_cataloged() {
    let source = "int counter;\nstatic void bump(int step, double scale)\n{\n  int local;\n}\nint main(void)\n{\n  return 0;\n}\n";
    let report = analyze_c(source).unwrap();

    assert_eq!(report.catalog.get("counter"), Some("int"));
    assert_eq!(report.catalog.get("local"), Some("int"));
    assert_eq!(report.catalog.get("step"), None);
    assert_eq!(report.catalog.get("scale"), None);
}

#[test]
fn test_syntax_error_is_a_parse_error() {
    let err = analyze_c("int main(void) {\n  iAutoSyncRead(&a, &b,\n}\n").unwrap_err();
    assert!(matches!(err, SyncGraphError::Parse(_)));
}
