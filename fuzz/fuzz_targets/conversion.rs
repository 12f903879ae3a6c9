#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(parsed) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(converted) = jsontree::JsonValue::of(parsed.clone()) {
        // Conversion preserves the value as observed through cross-equality.
        assert_eq!(converted, parsed);
        let _ = converted.stringify();
    }
});
