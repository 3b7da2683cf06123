use richnote_core::{
    action_for, action_for_descriptor, label_for, style_for, FormattingAction, SpanStyle,
    StyleDescriptor,
};

#[test]
fn every_action_round_trips_through_its_style() {
    for action in FormattingAction::ALL {
        let descriptor = style_for(action);
        assert_eq!(action_for_descriptor(&descriptor), Some(action));
        assert_eq!(action_for(&SpanStyle::Custom(descriptor)), Some(action));
        assert_eq!(action_for(&SpanStyle::Format(action)), Some(action));
    }
}

#[test]
fn descriptors_outside_the_catalog_have_no_action() {
    let larger_heading = StyleDescriptor {
        font_size: Some(28),
        ..StyleDescriptor::DEFAULT
    };
    assert_eq!(action_for(&SpanStyle::Custom(larger_heading)), None);
    assert_eq!(action_for(&SpanStyle::DEFAULT), None);
}

#[test]
fn heading_sizes_and_labels_are_stable() {
    assert_eq!(style_for(FormattingAction::Heading).font_size, Some(24));
    assert_eq!(style_for(FormattingAction::SubHeading).font_size, Some(20));
    assert_eq!(label_for(FormattingAction::Heading), "Title");
    assert_eq!(label_for(FormattingAction::Italics), "Italic");
}
