//! The patches this tool knows how to apply.
//!
//! Pattern text must match the site files byte for byte, so the literals
//! below keep their exact indentation and surrounding newlines.

use super::Patch;

const OLD_CURRENT_TIME_CSS: &str = r#"/* Current time display */
.current-time {
  font-size: 0.8rem;
  color: var(--muted);
  text-align: right;
  margin-top: 4px;
  white-space: nowrap;
}"#;

const NEW_CURRENT_TIME_CSS: &str = r#"/* Time display wrapper */
.time-display {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  flex-wrap: wrap;
}

/* Current time display */
.current-time {
  font-size: 0.8rem;
  color: var(--muted);
  text-align: center;
  white-space: nowrap;
}"#;

const OLD_HEADER_RIGHT_HTML: &str = r#"
    <div class="header-right">
        <label class="theme-switch" title="Toggle light/dark mode">
            <input type="checkbox" id="theme-toggle" aria-label="Toggle theme">
            <span class="switch-slider"></span>
        </label>
        <div id="current-time" class="current-time"></div>
    </div>
"#;

const NEW_HEADER_RIGHT_HTML: &str = r#"
    <div class="header-right">
        <div class="time-display">
            <span id="current-time" class="current-time"></span>
            <label class="theme-switch" title="Toggle light/dark mode">
            <input type="checkbox" id="theme-toggle" aria-label="Toggle theme">
            <span class="switch-slider"></span>
        </label>
        </div>
    </div>
"#;

/// Moves the clock styling into a centered `.time-display` wrapper.
pub const STYLE_TIME_DISPLAY: Patch = Patch {
    name: "fix-css",
    summary: "Add the .time-display wrapper rule and center .current-time",
    targets: &["style.css"],
    old: OLD_CURRENT_TIME_CSS,
    new: NEW_CURRENT_TIME_CSS,
    trailer: None,
};

/// Wraps the header clock and theme switch in a `time-display` container.
pub const HEADER_TIME_DISPLAY: Patch = Patch {
    name: "update-header",
    summary: "Group the header clock and theme switch under .time-display",
    targets: &["index.html", "booking.html", "signup.html", "contact.html"],
    old: OLD_HEADER_RIGHT_HTML,
    new: NEW_HEADER_RIGHT_HTML,
    trailer: Some("Done!"),
};

static CATALOG: [&Patch; 2] = [&STYLE_TIME_DISPLAY, &HEADER_TIME_DISPLAY];

pub fn catalog() -> &'static [&'static Patch] {
    &CATALOG
}

pub fn find(name: &str) -> Option<&'static Patch> {
    catalog().iter().copied().find(|p| p.name == name)
}
