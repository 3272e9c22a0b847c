#![no_main]

use libfuzzer_sys::fuzz_target;

use cirrus_config::VisualizerConfig;

// Import is fed user-supplied JSON. Arbitrary text must either produce a
// config or a clean error, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = VisualizerConfig::import_str(text) {
            // Whatever imported must survive the storage round trip
            let doc = config.storage_document();
            let _ = VisualizerConfig::import_document(&doc);
        }
    }
});
