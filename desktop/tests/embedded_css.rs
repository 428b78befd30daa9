#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_empty() {
    let non_ws_len = EMBEDDED_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "embedded theme looks truncated ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn embedded_css_defines_palette_tokens() {
    for token in ["--color-bg", "--color-accent", "--color-error", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close);
}
