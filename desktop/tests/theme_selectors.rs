#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors emitted by the shared step chart, summary card
  and pages remain present in the unified theme at `ui/assets/theme/main.css`.
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled chart in packaged (embedded) desktop builds.

How it works:
- The theme is embedded with `include_str!` (mirrors the constant in
  `desktop/src/main.rs`) and checked for a curated set of selectors.
- If you intentionally rename a selector, update the component markup and
  REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-home__actions",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    // Step chart
    ".step-chart {",
    ".step-chart__header",
    ".step-chart__canvas",
    ".step-chart__axis-label",
    ".step-chart__bar",
    ".step-chart__bar--clipped",
    ".step-chart__marker",
    ".step-chart__tooltip",
    ".step-chart__legend",
    ".step-chart__legend-swatch",
    ".step-chart__note",
    ".step-chart__error",
    // Summary card
    ".activity-summary {",
    ".activity-summary__row",
    ".activity-summary__value",
    ".activity-summary__label",
    ".activity-summary__placeholder",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_tier_has_an_accent() {
    let missing: Vec<_> = ["achieved", "good", "fair", "low"]
        .into_iter()
        .filter(|tier| !THEME_CSS.contains(&format!(".step-tier--{tier}")))
        .collect();
    assert!(missing.is_empty(), "Tier accent classes missing: {missing:?}");
}
