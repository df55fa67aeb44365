#![no_main]

use libfuzzer_sys::fuzz_target;
use pattern_sewing_editor::load_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Darf nie paniken, nur Fehler liefern
        if let Ok((blocks, report)) = load_document(json) {
            assert_eq!(report.blocks, blocks.len());
        }
    }
});
