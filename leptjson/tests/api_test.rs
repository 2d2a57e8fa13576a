// Test the public API entry points and accessors

use leptjson::{parse, parse_into, Member, ParseError, Parser, Value, ValueType};
use test_log::test;

fn assert_number(expected: f64, json: &str) {
    let value = parse(json).unwrap_or_else(|e| panic!("{json:?} failed: {e:?}"));
    assert_eq!(value.value_type(), ValueType::Number, "{json:?}");
    assert_eq!(value.as_number(), Some(expected), "{json:?}");
}

fn assert_string(expected: &[u8], json: &str) {
    let value = parse(json).unwrap_or_else(|e| panic!("{json:?} failed: {e:?}"));
    assert_eq!(value.value_type(), ValueType::String, "{json:?}");
    assert_eq!(value.as_bytes(), Some(expected), "{json:?}");
    assert_eq!(value.string_len(), Some(expected.len()), "{json:?}");
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse("null").map(|v| v.value_type()), Ok(ValueType::Null));
    assert_eq!(parse("   true   ").map(|v| v.value_type()), Ok(ValueType::True));
    assert_eq!(parse("   false   ").map(|v| v.value_type()), Ok(ValueType::False));
}

#[test]
fn test_parse_numbers() {
    assert_number(0.0, "0");
    assert_number(0.0, "-0");
    assert_number(0.0, "-0.0");
    assert_number(1.0, "1");
    assert_number(-1.0, "-1");
    assert_number(1.5, "1.5");
    assert_number(-1.5, "-1.5");
    assert_number(3.1416, "3.1416");
    assert_number(1E10, "1E10");
    assert_number(1e10, "1e10");
    assert_number(1E+10, "1E+10");
    assert_number(1E-10, "1E-10");
    assert_number(-1E10, "-1E10");
    assert_number(-1e10, "-1e10");
    assert_number(-1E+10, "-1E+10");
    assert_number(-1E-10, "-1E-10");
    assert_number(1.234E+10, "1.234E+10");
    assert_number(1.234E-10, "1.234E-10");
    // Underflow is a successful zero
    assert_number(0.0, "1e-10000");
}

#[test]
fn test_parse_number_boundaries() {
    assert_number(1.0000000000000002, "1.0000000000000002");
    assert_number(4.9406564584124654e-324, "4.9406564584124654e-324");
    assert_number(-4.9406564584124654e-324, "-4.9406564584124654e-324");
    assert_number(2.2250738585072009e-308, "2.2250738585072009e-308");
    assert_number(2.2250738585072014e-308, "2.2250738585072014e-308");
    assert_number(1.7976931348623157e+308, "1.7976931348623157e+308");
}

#[test]
fn test_parse_strings() {
    assert_string(b"", r#""""#);
    assert_string(b"Hello", r#""Hello""#);
    assert_string(b"Hello\nWorld", r#""Hello\nWorld""#);
    assert_string(b"\" \\ / \x08 \x0c \n \r \t", r#""\" \\ \/ \b \f \n \r \t""#);
    assert_string(b"Hello\0World", r#""Hello\u0000World""#);
    assert_string(b"\x24", r#""\u0024""#);
    assert_string(b"\xC2\xA2", r#""\u00A2""#);
    assert_string(b"\xE2\x82\xAC", r#""\u20AC""#);
    assert_string(b"\xF0\x9D\x84\x9E", r#""\uD834\uDD1E""#);
    assert_string(b"\xF0\x9D\x84\x9E", r#""\ud834\udd1e""#);
}

#[test]
fn test_raw_utf8_passes_through() {
    let value = parse("\"héllo wörld\"").unwrap();
    assert_eq!(value.as_str(), Some("héllo wörld"));
}

#[test]
fn test_parse_array() {
    let value = parse("[ [1,2], [2, 3], [4,5,6]]").unwrap();
    assert_eq!(value.array_len(), Some(3));
    for i in 0..3 {
        assert_eq!(
            value.array_element(i).map(Value::value_type),
            Some(ValueType::Array)
        );
    }
    let first = value.array_element(0).unwrap();
    assert_eq!(first.array_element(0).and_then(Value::as_number), Some(1.0));
    assert_eq!(first.array_element(1).and_then(Value::as_number), Some(2.0));
    let third = value.array_element(2).unwrap();
    assert_eq!(third.array_len(), Some(3));
    assert_eq!(third.array_element(1).and_then(Value::as_number), Some(5.0));
}

#[test]
fn test_parse_mixed_array() {
    let value =
        parse(r#"["hello, world", 1, true, null, ["hello", false, [1, 3, 4]], 1234]"#).unwrap();
    assert_eq!(value.array_len(), Some(6));
    let types: Vec<ValueType> = value
        .as_array()
        .unwrap()
        .iter()
        .map(Value::value_type)
        .collect();
    assert_eq!(
        types,
        [
            ValueType::String,
            ValueType::Number,
            ValueType::True,
            ValueType::Null,
            ValueType::Array,
            ValueType::Number
        ]
    );
    assert_eq!(
        value.array_element(0).and_then(Value::as_str),
        Some("hello, world")
    );
    let inner = value.array_element(4).unwrap();
    assert_eq!(inner.array_element(0).and_then(Value::as_str), Some("hello"));
    let innermost = inner.array_element(2).unwrap();
    assert_eq!(innermost.array_len(), Some(3));
    assert_eq!(innermost.array_element(1).and_then(Value::as_number), Some(3.0));
}

#[test]
fn test_parse_empty_collections() {
    assert_eq!(parse("[ ]"), Ok(Value::Array(Vec::new())));
    assert_eq!(parse("{ }"), Ok(Value::Object(Vec::new())));
}

#[test]
fn test_parse_object() {
    let value = parse(r#"{"a":1,"b":true}"#).unwrap();
    assert_eq!(value.value_type(), ValueType::Object);
    assert_eq!(value.object_len(), Some(2));
    assert_eq!(value.object_key(0), Some(&b"a"[..]));
    assert_eq!(value.object_key_len(0), Some(1));
    assert_eq!(value.object_value(0).and_then(Value::as_number), Some(1.0));
    assert_eq!(value.object_key(1), Some(&b"b"[..]));
    assert_eq!(
        value.object_value(1).map(Value::value_type),
        Some(ValueType::True)
    );
}

#[test]
fn test_parse_nested_object() {
    let json = r#"
    {
        "n" : null ,
        "f" : false ,
        "t" : true ,
        "i" : 123 ,
        "s" : "abc",
        "a" : [ 1, 2, 3 ],
        "o" : { "1" : 1, "2" : 2, "3" : 3 }
    }
    "#;
    let value = parse(json).unwrap();
    assert_eq!(value.object_len(), Some(7));
    let keys: Vec<&[u8]> = value.as_object().unwrap().iter().map(Member::key).collect();
    assert_eq!(keys, [&b"n"[..], b"f", b"t", b"i", b"s", b"a", b"o"]);

    let o = value.find_object_value("o").unwrap();
    assert_eq!(o.object_len(), Some(3));
    for i in 0..3 {
        let expected_key = (i + 1).to_string();
        assert_eq!(o.object_key(i), Some(expected_key.as_bytes()));
        assert_eq!(o.object_value(i).and_then(Value::as_number), Some((i + 1) as f64));
    }
    assert_eq!(
        value.find_object_value("a").and_then(Value::array_len),
        Some(3)
    );
}

#[test]
fn test_duplicate_keys_are_preserved() {
    let value = parse(r#"{"k":1,"k":2}"#).unwrap();
    assert_eq!(value.object_len(), Some(2));
    assert_eq!(value.object_key(0), value.object_key(1));
    assert_eq!(value.find_object_value("k").and_then(Value::as_number), Some(1.0));
    assert_eq!(value.object_value(1).and_then(Value::as_number), Some(2.0));
}

#[test]
fn test_key_with_escapes() {
    let value = parse(r#"{"a\u0000b\n":0}"#).unwrap();
    assert_eq!(value.object_key(0), Some(&b"a\0b\n"[..]));
    assert_eq!(value.object_key_len(0), Some(4));
}

#[test]
fn test_access_string() {
    let mut value = Value::new();
    value.set_string("");
    assert_eq!(value.as_bytes(), Some(&b""[..]));
    value.set_string("Hello");
    assert_eq!(value.as_bytes(), Some(&b"Hello"[..]));
    value.reset();
    assert!(value.is_null());
}

#[test]
fn test_access_boolean_and_number() {
    let mut value = Value::new();
    value.set_string("a");
    value.set_bool(true);
    assert_eq!(value.as_bool(), Some(true));
    value.set_bool(false);
    assert_eq!(value.as_bool(), Some(false));
    value.set_number(1234.5);
    assert_eq!(value.as_number(), Some(1234.5));
}

#[test]
fn test_reset_then_reuse_matches_fresh_value() {
    for json in ["null", "1", r#""s""#, "[1,[2]]", r#"{"a":{"b":[]}}"#] {
        let mut value = parse(json).unwrap();
        value.reset();
        assert_eq!(value, Value::new(), "{json}");
        assert_eq!(parse_into(&mut value, json), Ok(()));
        assert_eq!(Ok(value), parse(json));
    }
}

#[test]
fn test_parse_into_leaves_null_on_error() {
    let mut value = parse("[1,2,3]").unwrap();
    assert_eq!(parse_into(&mut value, "[1,2"), Err(ParseError::IncompleteArray));
    assert_eq!(value.value_type(), ValueType::Null);
}

#[test]
fn test_byte_input() {
    let bytes: Vec<u8> = b"[\"\xFF\"]".to_vec();
    let value = Parser::new().parse(&bytes).unwrap();
    let element = value.array_element(0).unwrap();
    assert_eq!(element.as_bytes(), Some(&b"\xFF"[..]));
    assert_eq!(element.as_str(), None);
}

#[test]
fn test_lenient_separators() {
    // Commas only separate; they are neither required nor checked for placement.
    assert_eq!(parse("[1 2]").ok().and_then(|v| v.array_len()), Some(2));
    assert_eq!(parse("[,1,,]").ok().and_then(|v| v.array_len()), Some(1));
}
