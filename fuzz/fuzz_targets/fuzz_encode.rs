#![no_main]
use arbitrary::Arbitrary;
use jsonpack::{Object, Options, Separators, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Member {
    Int(i64),
    Str(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    members: Vec<(String, Member)>,
    spaced: bool,
    escape_slash: bool,
}

fuzz_target!(|input: Input| {
    let mut obj = Object::new();
    for (k, m) in input.members {
        let v = match m {
            Member::Int(i) => Value::Integer(i),
            Member::Str(s) => Value::String(s),
        };
        // Empty keys are rejected by the builder
        let _ = obj.insert(k, v);
    }
    let opts = Options {
        separators: if input.spaced { Separators::Spaced } else { Separators::Compact },
        escape_slash: input.escape_slash,
    };

    let text = jsonpack::to_string_with(&obj, &opts).expect("in-memory serialization");
    assert_eq!(text, jsonpack::to_string_with(&obj, &opts).unwrap());

    let parsed: serde_json::Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("invalid JSON {:?}: {}", text, e));
    let back = Object::try_from(&parsed).expect("integer/string members only");
    if back != obj {
        panic!("Roundtrip mismatch!\nObject: {:?}\nJSON: {}\nDecoded: {:?}", obj, text, back);
    }
});
