use jsonpack::{Object, Options, Separators, Value};
use serde_json::json;

fn alice() -> Result<Object, jsonpack::Error> {
    Object::from_pairs([("id", Value::from(1)), ("name", Value::from("Alice"))])
}

#[test]
fn fixed_record_is_compact() -> Result<(), Box<dyn std::error::Error>> {
    let s = jsonpack::to_string(&alice()?)?;
    assert_eq!(s, r#"{"id":1,"name":"Alice"}"#);
    Ok(())
}

#[test]
fn fixed_record_parses_back() -> Result<(), Box<dyn std::error::Error>> {
    let s = jsonpack::to_string(&alice()?)?;
    let v: serde_json::Value = serde_json::from_str(&s)?;
    assert_eq!(v["id"], json!(1));
    assert_eq!(v["name"], json!("Alice"));
    Ok(())
}

#[test]
fn members_keep_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let obj = Object::from_pairs([
        ("zeta", Value::from(3)),
        ("alpha", Value::from("a")),
        ("mid", Value::from(-7)),
    ])?;
    assert_eq!(jsonpack::to_string(&obj)?, r#"{"zeta":3,"alpha":"a","mid":-7}"#);
    Ok(())
}

#[test]
fn empty_object() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(jsonpack::to_string(&Object::new())?, "{}");
    Ok(())
}

#[test]
fn serializing_twice_is_identical() -> Result<(), Box<dyn std::error::Error>> {
    let obj = alice()?;
    let first = jsonpack::to_string(&obj)?;
    let second = jsonpack::to_string(&obj)?;
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(obj.to_string(), first);
    Ok(())
}

#[test]
fn escaped_strings_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let samples = [
        r#"say "hi""#,
        r"C:\path\to",
        "\\\"",
        "line\nbreak\ttab\r\u{0008}\u{000C}",
        "\u{0000}\u{0001}\u{001F}",
        "ünïcödé ✓ 𝄞",
        "a/b",
    ];
    for sample in samples {
        let mut obj = Object::new();
        obj.insert(sample, sample)?;
        for opts in [Options::compact(), Options::spaced(), Options { escape_slash: true, ..Options::default() }] {
            let s = jsonpack::to_string_with(&obj, &opts)?;
            let v: serde_json::Value = serde_json::from_str(&s)?;
            let map = v.as_object().ok_or("not an object")?;
            assert_eq!(map.len(), 1);
            assert_eq!(map.get(sample), Some(&json!(sample)), "output: {}", s);
        }
    }
    Ok(())
}

#[test]
fn integer_extremes() -> Result<(), Box<dyn std::error::Error>> {
    let obj = Object::from_pairs([
        ("min", Value::Integer(i64::MIN)),
        ("max", Value::Integer(i64::MAX)),
        ("zero", Value::Integer(0)),
    ])?;
    let s = jsonpack::to_string(&obj)?;
    assert_eq!(
        s,
        r#"{"min":-9223372036854775808,"max":9223372036854775807,"zero":0}"#
    );
    let v: serde_json::Value = serde_json::from_str(&s)?;
    assert_eq!(v["min"].as_i64(), Some(i64::MIN));
    Ok(())
}

#[test]
fn spaced_separators_stay_on_one_line() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        separators: Separators::Spaced,
        ..Options::default()
    };
    let s = jsonpack::to_string_with(&alice()?, &opts)?;
    assert_eq!(s, r#"{"id": 1, "name": "Alice"}"#);
    Ok(())
}

#[test]
fn escape_slash_option() -> Result<(), Box<dyn std::error::Error>> {
    let mut obj = Object::new();
    obj.insert("url", "http://x/y")?;
    assert_eq!(jsonpack::to_string(&obj)?, r#"{"url":"http://x/y"}"#);
    let opts = Options {
        escape_slash: true,
        ..Options::default()
    };
    assert_eq!(
        jsonpack::to_string_with(&obj, &opts)?,
        r#"{"url":"http:\/\/x\/y"}"#
    );
    Ok(())
}

#[test]
fn writer_receives_whole_document() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf: Vec<u8> = Vec::new();
    jsonpack::to_writer(&mut buf, &alice()?, &Options::default())?;
    assert_eq!(String::from_utf8(buf)?, r#"{"id":1,"name":"Alice"}"#);
    Ok(())
}

struct Refusing;

impl std::fmt::Write for Refusing {
    fn write_str(&mut self, _: &str) -> std::fmt::Result {
        Err(std::fmt::Error)
    }
}

#[test]
fn failing_sink_is_a_serialization_error() -> Result<(), Box<dyn std::error::Error>> {
    let err = jsonpack::to_fmt(&mut Refusing, &alice()?, &Options::default()).unwrap_err();
    assert!(matches!(err, jsonpack::Error::Serialization(_)), "{err:?}");
    Ok(())
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn io_failure_surfaces_as_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let err = jsonpack::to_writer(BrokenPipe, &alice()?, &Options::default()).unwrap_err();
    assert!(matches!(err, jsonpack::Error::Io(_)), "{err:?}");
    Ok(())
}
