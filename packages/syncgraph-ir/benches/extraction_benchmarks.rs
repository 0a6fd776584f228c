//! Benchmarks for the synchronization analysis
//!
//! Run with: cargo bench --bench extraction_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use syncgraph_ir::features::parsing::{FrontEnd, TreeSitterCFrontEnd};
use syncgraph_ir::features::sync_analysis::SyncAnalysisUseCase;

/// Generate a C file with N worker threads, each touching `vars` shared
/// variables through every access primitive
fn generate_c_workers(threads: usize, vars: usize) -> String {
    let mut source = String::from("#include <pthread.h>\n#include \"AutoSync.h\"\n\n");

    for v in 0..threads * vars {
        source.push_str(&format!("uint32_t shared_{v};\n"));
        source.push_str(&format!(
            "xAutoSyncIntentions xIntention{v} = {{.bConstantInitByMain = 1}};\n"
        ));
    }

    for t in 0..threads {
        source.push_str(&format!("\nvoid *Worker_{t}(void *args)\n{{\n  uint32_t local;\n"));
        for v in t * vars..(t + 1) * vars {
            source.push_str(&format!(
                r#"  iAutoSyncRead(&local, &shared_{v}, sizeof(local), xIntention{v});
  iAutoSyncReadToUpdate(&local, &shared_{v}, sizeof(local), xIntention{v});
  iAutoSyncUpdate(&shared_{v}, &local, sizeof(local), xIntention{v});
  iAutoSyncWrite(&shared_{v}, &local, sizeof(local), xIntention{v});
"#
            ));
        }
        source.push_str("  return NULL;\n}\n");
    }

    source.push_str("\nint main(void)\n{\n  pthread_t t[4];\n  int i;\n");
    for t in 0..threads {
        source.push_str(&format!(
            "  for (i = 0; i < 4; i++) {{\n    pthread_create(&t[i], NULL, &Worker_{t}, NULL);\n  }}\n"
        ));
    }
    source.push_str("  return 0;\n}\n");
    source
}

/// Benchmark C text → report
fn bench_parse_and_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_analyze");

    for threads in [4usize, 16, 64].iter() {
        let source = generate_c_workers(*threads, 8);
        group.throughput(Throughput::Elements((*threads * 8 * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &source, |b, source| {
            b.iter(|| {
                let unit = TreeSitterCFrontEnd::new()
                    .parse(black_box(source), "bench.c")
                    .unwrap();
                SyncAnalysisUseCase::new().analyze(&unit).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark the analysis alone on a pre-parsed tree
fn bench_analyze_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_only");

    for threads in [4usize, 16, 64].iter() {
        let unit = TreeSitterCFrontEnd::new()
            .parse(&generate_c_workers(*threads, 8), "bench.c")
            .unwrap();
        let use_case = SyncAnalysisUseCase::new();

        group.throughput(Throughput::Elements((*threads * 8 * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &unit, |b, unit| {
            b.iter(|| use_case.analyze(black_box(unit)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark artifact serialization
fn bench_serialize(c: &mut Criterion) {
    let unit = TreeSitterCFrontEnd::new()
        .parse(&generate_c_workers(32, 8), "bench.c")
        .unwrap();
    let report = SyncAnalysisUseCase::new().analyze(&unit).unwrap();

    c.bench_function("serialize_artifact", |b| {
        b.iter(|| black_box(&report).to_json().unwrap());
    });
}

criterion_group!(benches, bench_parse_and_analyze, bench_analyze_only, bench_serialize);
criterion_main!(benches);
