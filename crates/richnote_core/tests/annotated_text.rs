use richnote_core::{
    materialize, style_for, AnnotatedText, FormatSet, FormattingAction, FormattingSpan, SpanStyle,
    StyleDescriptor,
};

#[test]
fn materialize_is_deterministic() {
    let spans = vec![
        FormattingSpan::new(0, 4, [FormattingAction::Heading, FormattingAction::Bold]),
        FormattingSpan::new(2, 3, FormatSet::new()),
        FormattingSpan::new(1, 6, [FormattingAction::Highlight]),
    ];
    assert_eq!(materialize("Notes!", &spans), materialize("Notes!", &spans));
}

#[test]
fn later_spans_compose_on_top_of_earlier_ones() {
    let spans = vec![
        FormattingSpan::new(0, 6, [FormattingAction::Underline]),
        FormattingSpan::new(2, 4, [FormattingAction::Strikethrough, FormattingAction::Bold]),
    ];
    let annotated = materialize("abcdef", &spans);

    assert_eq!(annotated.resolved_style_at(0), style_for(FormattingAction::Underline));
    let middle = annotated.resolved_style_at(3);
    assert_eq!(
        middle.text_decoration,
        style_for(FormattingAction::Strikethrough).text_decoration
    );
    assert_eq!(
        middle.font_weight,
        style_for(FormattingAction::Bold).font_weight
    );
}

#[test]
fn extract_then_materialize_reproduces_catalog_styles() {
    let original = AnnotatedText::builder("Heading text")
        .add_style(FormattingAction::Heading, 0, 7)
        .add_style(FormattingAction::Italics, 8, 12)
        .build();
    let rebuilt = materialize(original.text(), &original.extract_spans());
    assert_eq!(rebuilt, original);
}

#[test]
fn custom_ranges_are_dropped_when_rebuilt() {
    let custom = StyleDescriptor {
        font_size: Some(12),
        ..StyleDescriptor::DEFAULT
    };
    let original = AnnotatedText::builder("xyz")
        .add_style(SpanStyle::Custom(custom), 0, 3)
        .build();
    assert_eq!(original.styles_at(1).count(), 1);
    assert!(materialize(original.text(), &original.extract_spans())
        .styles()
        .is_empty());
}
