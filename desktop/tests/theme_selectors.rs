#![cfg(test)]
//! Selectors the shared components render with. Update this list together
//! with the markup when a class is renamed.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Layout
    ":root",
    ".app-header",
    ".app-header__locale",
    ".app-main",
    ".page {",
    ".section-title",
    ".visually-hidden",
    // Summary
    ".summary-cards",
    ".summary-card__label",
    ".summary-card__value",
    // Charts
    ".chart-grid",
    ".chart-card",
    ".chart-card__title",
    ".chart {",
    ".chart__bar",
    ".chart__axis-line",
    ".chart__median",
    ".chart__whisker",
    ".chart__outlier",
    ".chart__point",
    // Explorers and sliders
    ".explorer-grid",
    ".explorer__result",
    ".explorer__error",
    ".slider__input",
    ".slider__value",
    // Export
    ".button--primary",
    ".export__status--success",
    ".export__status--error",
    // Responsive block
    "@media (max-width:",
];

#[test]
fn theme_has_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !THEME_CSS.contains(*selector))
        .collect();
    assert!(
        missing.is_empty(),
        "missing {} required selectors in the shared theme: {missing:?}",
        missing.len()
    );
}

#[test]
fn grids_collapse_on_narrow_windows() {
    let media = THEME_CSS
        .split("@media")
        .nth(1)
        .expect("responsive block present");
    assert!(media.contains(".chart-grid"));
    assert!(media.contains(".explorer-grid"));
}
