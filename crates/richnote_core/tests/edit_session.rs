use richnote_core::{
    decode, on_text_changed, AnnotatedText, EditSession, FormatSet, FormattingAction,
    FormattingSpan, Selection, SpanStyle,
};

#[test]
fn controller_returns_spans_alongside_rendered_text() {
    let previous = AnnotatedText::builder("Hello")
        .add_style(FormattingAction::Underline, 0, 5)
        .build();
    let active = FormatSet::from([FormattingAction::Bold]);

    let change = on_text_changed(&previous, "Hello world", Selection::new(6, 11), &active);

    assert_eq!(
        change.spans,
        vec![
            FormattingSpan::new(0, 5, [FormattingAction::Underline]),
            FormattingSpan::new(6, 11, [FormattingAction::Bold]),
        ]
    );
    assert_eq!(change.annotated.text(), "Hello world");
    assert_eq!(change.annotated.styles().len(), 2);
}

#[test]
fn controller_does_not_mutate_previous_value() {
    let previous = AnnotatedText::builder("abc")
        .add_style(FormattingAction::Bold, 0, 3)
        .build();
    let snapshot = previous.clone();
    let _ = on_text_changed(&previous, "a", Selection::caret(1), &FormatSet::new());
    assert_eq!(previous, snapshot);
}

#[test]
fn interior_deletion_only_clamps_to_new_length() {
    let previous = AnnotatedText::builder("abcdef")
        .add_style(FormattingAction::Highlight, 3, 6)
        .build();

    let change = on_text_changed(&previous, "abdef", Selection::caret(2), &FormatSet::new());

    assert_eq!(
        change.spans[0],
        FormattingSpan::new(3, 5, [FormattingAction::Highlight])
    );
}

#[test]
fn session_types_formatted_text_and_persists_it() {
    let mut session = EditSession::new(AnnotatedText::plain("Plan"));
    session.toggle_format(FormattingAction::Heading);
    session.on_text_changed("Plan", Selection::new(0, 4));
    session.toggle_format(FormattingAction::Heading);
    session.on_text_changed("Plan\nmilk", Selection::caret(9));

    let styles = session.annotated().styles();
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].style, SpanStyle::Format(FormattingAction::Heading));
    assert_eq!((styles[0].start, styles[0].end), (0, 4));
    assert!(session.spans().last().is_some_and(FormattingSpan::is_marker));

    let stored = decode(&session.serialize()).unwrap();
    assert_eq!(&stored, session.annotated());
}

#[test]
fn session_rejects_corrupt_description() {
    assert!(EditSession::from_serialized("{\"spans\":[]}").is_err());
}
