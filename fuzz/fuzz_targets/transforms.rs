#![no_main]

use jsontree::JsonValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(parsed) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(document) = JsonValue::of(parsed) else {
        return;
    };

    let rendered = document.stringify();
    assert_eq!(rendered, document.stringify());

    let numbers = |value: &JsonValue| value.as_number().is_some();
    let once = document.filter(numbers);
    assert_eq!(once.filter(numbers), once);

    assert_eq!(document.map(Clone::clone), document);
    assert_eq!(document.deep_map(Clone::clone), document);

    let shallow = document.filter_with_path(|path, _| path.segments().len() < 3);
    let _ = shallow.stringify();
});
