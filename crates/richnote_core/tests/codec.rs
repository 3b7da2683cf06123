use richnote_core::{
    action_for, decode, encode, on_text_changed, style_for, AnnotatedText, DecodeError, FormatSet,
    FormattingAction, Selection, SpanStyle, StyleDescriptor,
};
use serde_json::{json, Value};

fn triples(value: &AnnotatedText) -> Vec<(usize, usize, Option<FormattingAction>)> {
    value
        .styles()
        .iter()
        .map(|range| (range.start, range.end, action_for(&range.style)))
        .collect()
}

#[test]
fn catalog_styles_round_trip_exactly() {
    let mut builder = AnnotatedText::builder("Grocery list: 🍎 apples, 🍐 pears");
    for (index, action) in FormattingAction::ALL.into_iter().enumerate() {
        builder = builder.add_style(action, index, index + 3);
    }
    builder = builder.add_style(FormattingAction::Bold, 0, 3);
    let original = builder.build();

    let decoded = decode(&encode(&original)).unwrap();
    assert_eq!(decoded.text(), original.text());
    assert_eq!(triples(&decoded), triples(&original));
    assert_eq!(decoded, original);
}

#[test]
fn encoded_document_uses_stable_field_names_and_tags() {
    let original = AnnotatedText::builder("Hi")
        .add_style(FormattingAction::SubHeading, 0, 2)
        .build();
    let value: Value = serde_json::from_str(&encode(&original)).unwrap();
    assert_eq!(
        value,
        json!({
            "text": "Hi",
            "spans": [{ "start": 0, "end": 2, "tag": "SubHeading" }],
        })
    );
}

#[test]
fn unknown_tag_decodes_to_default_style_keeping_range() {
    let original = AnnotatedText::builder("Title")
        .add_style(FormattingAction::Heading, 0, 5)
        .build();
    let corrupted = encode(&original).replace("\"Heading\"", "\"Unknown\"");

    let decoded = decode(&corrupted).unwrap();
    let range = decoded.styles()[0];
    assert_eq!((range.start, range.end), (0, 5));
    assert_eq!(range.style, SpanStyle::DEFAULT);
    assert_eq!(action_for(&range.style), None);
}

#[test]
fn custom_styles_are_lossy_by_design() {
    let custom = StyleDescriptor {
        font_size: Some(30),
        ..StyleDescriptor::DEFAULT
    };
    let original = AnnotatedText::builder("abc")
        .add_style(SpanStyle::Custom(custom), 1, 2)
        .build();
    let decoded = decode(&encode(&original)).unwrap();
    assert_eq!(decoded.styles()[0].style, SpanStyle::DEFAULT);
}

#[test]
fn custom_style_equal_to_catalog_entry_encodes_with_its_tag() {
    let original = AnnotatedText::builder("Hello")
        .add_style(SpanStyle::Custom(style_for(FormattingAction::Bold)), 0, 5)
        .build();

    let value: Value = serde_json::from_str(&encode(&original)).unwrap();
    assert_eq!(value["spans"][0]["tag"], "Bold");

    let decoded = decode(&encode(&original)).unwrap();
    assert_eq!(triples(&decoded), vec![(0, 5, Some(FormattingAction::Bold))]);

    let change = on_text_changed(&original, "Hello!", Selection::caret(6), &FormatSet::new());
    assert_eq!(change.annotated.styles().len(), 1);
    assert_eq!(
        action_for(&change.annotated.styles()[0].style),
        Some(FormattingAction::Bold)
    );
}

#[test]
fn backwards_selection_output_decodes() {
    let change = on_text_changed(
        &AnnotatedText::plain("Hello"),
        "Hello",
        Selection::new(4, 1),
        &FormatSet::from([FormattingAction::Bold]),
    );
    let encoded = encode(&change.annotated);
    let value: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        value["spans"],
        json!([{ "start": 1, "end": 4, "tag": "Bold" }])
    );
    assert_eq!(decode(&encoded).unwrap(), change.annotated);
}

#[test]
fn missing_text_field_is_a_decode_error() {
    let err = decode(r#"{"spans":[]}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
    assert!(err.to_string().contains("text"));
}

#[test]
fn structurally_invalid_payloads_are_rejected() {
    let payloads = [
        "",
        "not json",
        r#"{"text":"a"}"#,
        r#"{"text":"a","spans":{}}"#,
        r#"{"text":"a","spans":[{"start":-1,"end":1,"tag":"Bold"}]}"#,
        r#"{"text":"a","spans":[{"start":0.5,"end":1,"tag":"Bold"}]}"#,
        r#"{"text":"a","spans":[{"start":0,"tag":"Bold"}]}"#,
        r#"{"text":7,"spans":[]}"#,
    ];
    for payload in payloads {
        let err = decode(payload).unwrap_err();
        assert!(
            matches!(err, DecodeError::Malformed(_)),
            "payload {payload:?} gave {err}"
        );
    }
}

#[test]
fn reversed_range_is_rejected() {
    let err = decode(r#"{"text":"abc","spans":[{"start":2,"end":1,"tag":"Bold"}]}"#).unwrap_err();
    match err {
        DecodeError::InvalidRange { index, start, end } => {
            assert_eq!((index, start, end), (0, 2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_and_null_tags_decode_to_default() {
    let decoded = decode(
        r#"{"text":"abc","spans":[{"start":0,"end":1},{"start":1,"end":2,"tag":null}]}"#,
    )
    .unwrap();
    assert!(decoded
        .styles()
        .iter()
        .all(|range| range.style == SpanStyle::DEFAULT));
}
