//! Integration tests for the rectangle type and record encoding.

use chisel_record::{
    FromFields, Rectangle, RecordError, decode_record, encode_record, field, make_rectangle,
};
use serde::Serialize;
use serde_json::Value;

#[test]
fn test_rectangle_area() {
    let rect = make_rectangle(10.0, 20.0);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 20.0);
    assert_eq!(rect.area(), 200.0);
    assert_eq!(Rectangle::new(0.5, 4.0).area(), 2.0);
}

#[test]
fn test_encode_rectangle() {
    let text = encode_record(&make_rectangle(10.0, 20.0)).unwrap();
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_round_trip() {
    let rect = make_rectangle(10.0, 20.0);
    let decoded: Rectangle = decode_record(&encode_record(&rect).unwrap()).unwrap();
    assert_eq!(decoded, rect);
    assert_eq!(decoded.area(), 200.0);
}

#[test]
fn test_decode_accepts_integers() {
    let decoded: Rectangle = decode_record(r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(decoded, make_rectangle(10.0, 20.0));
}

#[test]
fn test_round_trip_from_integer_text() {
    let decoded: Rectangle = decode_record(r#"{"width":10,"height":20}"#).unwrap();
    let text = encode_record(&decoded).unwrap();
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
    assert_eq!(decode_record::<Rectangle>(&text).unwrap(), decoded);
    assert_eq!(decoded.area(), 200.0);
}

#[test]
fn test_decode_is_positional() {
    // Keys are ignored; the first value is always the width.
    let decoded: Rectangle = decode_record(r#"{"height":3,"width":7}"#).unwrap();
    assert_eq!(decoded.width, 3.0);
    assert_eq!(decoded.height, 7.0);
}

#[test]
fn test_decode_too_few_fields() {
    let result = decode_record::<Rectangle>(r#"{"width":10}"#);
    assert!(matches!(
        result,
        Err(RecordError::ArityMismatch {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_decode_too_many_fields() {
    let result = decode_record::<Rectangle>(r#"{"width":1,"height":2,"depth":3}"#);
    assert!(matches!(
        result,
        Err(RecordError::ArityMismatch {
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn test_decode_wrong_field_type() {
    let result = decode_record::<Rectangle>(r#"{"width":"wide","height":2}"#);
    assert!(matches!(
        result,
        Err(RecordError::FieldType { index: 0, .. })
    ));
}

#[test]
fn test_decode_not_an_object() {
    let result = decode_record::<Rectangle>("[10, 20]");
    assert!(matches!(result, Err(RecordError::NotAnObject)));
}

#[test]
fn test_decode_malformed_text() {
    let result = decode_record::<Rectangle>(r#"{"width":10,"#);
    assert!(matches!(result, Err(RecordError::Json(_))));
}

#[derive(Debug, PartialEq, Serialize)]
struct Label {
    text: String,
    size: u32,
    bold: bool,
}

impl FromFields for Label {
    const ARITY: usize = 3;

    fn from_fields(fields: Vec<Value>) -> Result<Self, RecordError> {
        Ok(Self {
            text: field(&fields, 0)?,
            size: field(&fields, 1)?,
            bold: field(&fields, 2)?,
        })
    }
}

#[test]
fn test_round_trip_custom_record() {
    let label = Label {
        text: "Total".to_string(),
        size: 14,
        bold: true,
    };
    let text = encode_record(&label).unwrap();
    assert_eq!(text, r#"{"text":"Total","size":14,"bold":true}"#);
    assert_eq!(decode_record::<Label>(&text).unwrap(), label);
}

#[test]
fn test_custom_record_field_error_names_type() {
    let result = decode_record::<Label>(r#"{"text":"Total","size":-1,"bold":true}"#);
    let Err(RecordError::FieldType { index, expected }) = result else {
        panic!("expected a field type error, got {result:?}");
    };
    assert_eq!(index, 1);
    assert_eq!(expected, "u32");
}
