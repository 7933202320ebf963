use folio_domain::constants::{
    BRAND_FONT, DEFAULT_SANS, HX_REQUEST, INDEX_FILE, default_font_stack,
};

#[test]
fn constants_match_expected_strings() {
    assert_eq!(HX_REQUEST, "HX-Request");
    assert_eq!(INDEX_FILE, "index.json");
    assert_eq!(BRAND_FONT, "Chakra Petch");
}

#[test]
fn default_stacks_end_with_generic_family() {
    assert_eq!(default_font_stack("sans"), Some(DEFAULT_SANS));
    assert_eq!(default_font_stack("serif").and_then(|s| s.last().copied()), Some("serif"));
    assert_eq!(default_font_stack("mono").and_then(|s| s.last().copied()), Some("monospace"));
    assert!(default_font_stack("display").is_none());
}
