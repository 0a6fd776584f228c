#![no_main]

use libfuzzer_sys::fuzz_target;
use syncgraph_ir::features::parsing::{FrontEnd, TreeSitterCFrontEnd};
use syncgraph_ir::features::sync_analysis::SyncAnalysisUseCase;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Bad input must come back as an error, never a panic
        if let Ok(unit) = TreeSitterCFrontEnd::new().parse(source, "fuzz.c") {
            let _ = SyncAnalysisUseCase::new().analyze(&unit);
        }
    }
});
