// Browser-target smoke tests. These re-run the core state machine under the
// wasm target to catch wasm-specific float or integer surprises; the full
// behavioral suite lives in the native tests.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use rect_cascade::StageConfig;
use rect_cascade::anim::{CycleStart, Step};
use rect_cascade::chain::RectChain;
use rect_cascade::traversal::Traversal;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn leg_snaps_exactly_under_wasm() {
    let cfg = StageConfig::default();
    let mut chain = RectChain::new(cfg.node_count);
    let mut traversal = Traversal::new();
    assert_eq!(traversal.begin(&mut chain), CycleStart::Started);
    let mut guard = 0;
    while traversal.tick(&mut chain, cfg.step_size, cfg.completion_threshold) != Step::Completed {
        guard += 1;
        assert!(guard < 64);
    }
    assert_eq!(chain.node(0).progress().scale(), 1.0);
    assert_eq!(traversal.active(), 1);
}
