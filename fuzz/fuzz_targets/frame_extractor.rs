#![no_main]

use libfuzzer_sys::fuzz_target;

use cirrus_wire::FrameExtractor;

// Feed arbitrary chunk sequences to the extractor. It must never panic
// and the buffer must stay bounded no matter how the input is split.
fuzz_target!(|data: &[u8]| {
    let mut extractor = FrameExtractor::new();

    for piece in data.split(|&b| b == 0) {
        if let Ok(chunk) = std::str::from_utf8(piece) {
            extractor.ingest(chunk);
            assert!(extractor.buffered_len() <= cirrus_wire::MAX_BUFFER_LEN);
        }
    }
});
