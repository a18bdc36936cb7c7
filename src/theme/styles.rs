//! Global CSS styles for MySoothe.
//!
//! Token values come from the core theme as CSS custom properties; the
//! rules below only reference those variables.

use mysoothe_core::{Dp, Theme};

const BASE_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body1-family);
  font-size: var(--font-body1-size);
  background: var(--color-background);
  color: var(--color-on-background);
  overflow: hidden;
}

/* === Typography === */
.text-h2 {
  font-family: var(--font-h2-family);
  font-weight: var(--font-h2-weight);
  font-size: var(--font-h2-size);
  letter-spacing: var(--font-h2-spacing);
}

.text-h3 {
  font-family: var(--font-h3-family);
  font-weight: var(--font-h3-weight);
  font-size: var(--font-h3-size);
  letter-spacing: var(--font-h3-spacing);
}

.text-caption {
  font-family: var(--font-caption-family);
  font-weight: var(--font-caption-weight);
  font-size: var(--font-caption-size);
  letter-spacing: var(--font-caption-spacing);
}

/* === Scaffold === */
.scaffold {
  position: relative;
  height: 100vh;
  display: flex;
  flex-direction: column;
}

.scaffold-body {
  flex: 1;
  min-height: 0;
}

.scaffold-bottom-bar {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
}

/* === Home Screen === */
.home-screen {
  height: 100%;
  overflow-y: auto;
  overflow-x: hidden;
}

/* === Search Bar === */
.search-field {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 0 12px;
  border-radius: var(--shape-small) var(--shape-small) 0 0;
  border-bottom: 1px solid var(--color-on-surface);
  color: var(--color-on-surface);
}

.search-input {
  flex: 1;
  border: none;
  outline: none;
  background: transparent;
  color: var(--color-on-surface);
  font: inherit;
}

.search-input::placeholder {
  color: var(--color-on-surface);
  opacity: 0.6;
}

/* === Align Your Body === */
.align-body-row {
  display: flex;
  overflow-x: auto;
  scrollbar-width: none;
}

.align-body-element {
  display: flex;
  flex-direction: column;
  align-items: center;
  flex-shrink: 0;
}

.align-body-image {
  border-radius: 50%;
  object-fit: cover;
}

/* === Favorite Collections === */
.collections-grid {
  display: grid;
  grid-auto-flow: column;
  overflow-x: auto;
  scrollbar-width: none;
}

.collection-card {
  display: flex;
  align-items: center;
  overflow: hidden;
  background: var(--color-surface);
  color: var(--color-on-surface);
  border-radius: var(--shape-small);
}

.collection-card-image {
  object-fit: cover;
  flex-shrink: 0;
}

/* === Bottom Navigation === */
.bottom-nav {
  display: flex;
  align-items: stretch;
  background: var(--color-background);
  box-shadow: 0 -1px 8px rgba(0, 0, 0, 0.08);
}

.bottom-nav-item {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2px;
  border: none;
  background: transparent;
  color: var(--color-on-background);
  opacity: 0.6;
  cursor: pointer;
}

.bottom-nav-item.selected {
  opacity: 1;
}
"#;

/// Stylesheet for `theme`: token variables followed by the base rules.
pub fn global_styles(theme: &Theme) -> String {
    let mut css = theme.css_variables();
    css.push_str(BASE_STYLES);
    css
}

/// Inline CSS placing a single text line's baseline `top` below the top edge
/// and `bottom` above the bottom edge.
pub fn baseline_padding(top: Dp, bottom: Dp) -> String {
    format!(
        "line-height: 1; padding-top: calc({top} - 0.8em); padding-bottom: calc({bottom} - 0.2em);"
    )
}
