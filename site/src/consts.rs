//! Markup hooks and service endpoints shared by the page enhancements.

// ── Partials ────────────────────────────────────────────────────

pub const INCLUDE_ATTR: &str = "data-include";
pub const INCLUDE_SELECTOR: &str = "[data-include]";

// ── Collapsibles ────────────────────────────────────────────────

pub const TOGGLE_SELECTOR: &str = "[data-collapsible-toggle]";
pub const TOGGLE_TARGET_ATTR: &str = "data-collapsible-target";
pub const LABEL_BASE_ATTR: &str = "data-label-base";
pub const OPEN_CLASS: &str = "open";

// ── Usage counter ───────────────────────────────────────────────

/// Attribute on `<body>` naming the page's counter.
pub const COUNTER_KEY_ATTR: &str = "data-counter-key";
/// Id of the element (from the footer partial) that shows the count.
pub const COUNTER_ELEMENT_ID: &str = "toolUsageCount";
pub const COUNTER_API_BASE: &str = "https://api.counterapi.dev/v1";
pub const COUNTER_NAMESPACE: &str = "imthebus";
/// Shown when the count can't be determined.
pub const UNKNOWN_COUNT: &str = "?";

// ── Page API ────────────────────────────────────────────────────

/// Name of the `window` property exposing helpers to per-page scripts.
pub const GLOBAL_NAME: &str = "imthebusCore";
