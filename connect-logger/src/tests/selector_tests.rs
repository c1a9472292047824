//! Tests for selector parsing.

use crate::selector::Selector;

#[test]
fn xpath_queries_are_recognized_by_leading_slash() {
    assert_eq!(
        Selector::from("//div[@class='key']"),
        Selector::XPath("//div[@class='key']".to_string())
    );
}

#[test]
fn tag_prefix_and_bare_words_select_by_tag() {
    assert_eq!(Selector::from("tag:input"), Selector::Tag("input".to_string()));
    assert_eq!(
        Selector::from("mat-card-title"),
        Selector::Tag("mat-card-title".to_string())
    );
}

#[test]
fn display_round_trips_through_from() {
    for s in ["tag:button", "//div[@calss='value']"] {
        let selector = Selector::from(s);
        assert_eq!(Selector::from(selector.to_string().as_str()), selector);
    }
}
