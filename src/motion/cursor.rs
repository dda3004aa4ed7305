//! Custom cursor: a dot that tracks the pointer exactly and an outline ring
//! that chases it with exponential smoothing.
//!
//! Elements opt into cursor variants declaratively with
//! `data-cursor="<token>"` and an optional `data-cursor-label`.

use serde::{Deserialize, Serialize};

pub const CURSOR_ATTR: &str = "data-cursor";
pub const CURSOR_LABEL_ATTR: &str = "data-cursor-label";
pub const DEFAULT_LERP: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorVariant {
    #[default]
    Default,
    Pointer,
    Text,
    Action,
    Media,
    Drag,
    Hidden,
}

const VARIANT_TOKENS: [(&str, CursorVariant); 7] = [
    ("default", CursorVariant::Default),
    ("pointer", CursorVariant::Pointer),
    ("text", CursorVariant::Text),
    ("action", CursorVariant::Action),
    ("media", CursorVariant::Media),
    ("drag", CursorVariant::Drag),
    ("hidden", CursorVariant::Hidden),
];

impl CursorVariant {
    /// Look up a declared token. Unknown tokens fall back to `Default`.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        VARIANT_TOKENS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|(_, variant)| *variant)
            .unwrap_or_default()
    }

    pub fn as_token(&self) -> &'static str {
        VARIANT_TOKENS
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(name, _)| *name)
            .unwrap_or("default")
    }

    /// Diameter of the outline ring in px. Zero hides it.
    pub fn outline_size(&self) -> f64 {
        match self {
            CursorVariant::Pointer => 48.0,
            CursorVariant::Action | CursorVariant::Drag => 80.0,
            CursorVariant::Media => 120.0,
            _ => 0.0,
        }
    }

    /// Diameter of the dot in px. The text variant renders as a caret instead.
    pub fn dot_size(&self) -> f64 {
        match self {
            CursorVariant::Pointer => 8.0,
            CursorVariant::Text => 4.0,
            CursorVariant::Action
            | CursorVariant::Media
            | CursorVariant::Drag
            | CursorVariant::Hidden => 0.0,
            CursorVariant::Default => 16.0,
        }
    }

    pub fn shows_label(&self) -> bool {
        matches!(
            self,
            CursorVariant::Action | CursorVariant::Media | CursorVariant::Drag
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub variant: CursorVariant,
    pub label: String,
}

impl CursorState {
    pub fn new(variant: CursorVariant, label: impl Into<String>) -> Self {
        Self {
            variant,
            label: label.into(),
        }
    }

    /// Label to render inside the outline, if any.
    pub fn visible_label(&self) -> Option<&str> {
        if self.variant.shows_label() && !self.label.is_empty() {
            Some(&self.label)
        } else {
            None
        }
    }
}

/// One element on the path from a hovered target up to the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverNode {
    /// Value of `data-cursor`, if declared.
    pub cursor: Option<String>,
    /// Value of `data-cursor-label`, if declared.
    pub label: Option<String>,
    /// Links, buttons and form controls.
    pub interactive: bool,
}

impl HoverNode {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::default()
        }
    }

    pub fn annotated(token: &str, label: Option<&str>) -> Self {
        Self {
            cursor: Some(token.to_string()),
            label: label.map(str::to_string),
            interactive: false,
        }
    }
}

/// Tags that get the pointer variant without an explicit annotation.
pub fn is_interactive_tag(tag_name: &str, role: Option<&str>) -> bool {
    const TAGS: [&str; 5] = ["a", "button", "input", "textarea", "select"];
    TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag_name)) || role == Some("button")
}

/// Resolve the cursor state for a hover path ordered nearest first.
pub fn resolve_hover(path: &[HoverNode]) -> CursorState {
    if let Some(node) = path.iter().find(|n| n.cursor.is_some()) {
        let variant = node
            .cursor
            .as_deref()
            .map(CursorVariant::from_token)
            .unwrap_or_default();
        return CursorState::new(variant, node.label.clone().unwrap_or_default());
    }
    if path.iter().any(|n| n.interactive) {
        return CursorState::new(CursorVariant::Pointer, "");
    }
    CursorState::default()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Where the "native cursor hidden" flag is written, e.g. a body class.
pub trait NativeCursorSink {
    fn set_hidden(&mut self, hidden: bool);
}

impl NativeCursorSink for Vec<bool> {
    fn set_hidden(&mut self, hidden: bool) {
        self.push(hidden);
    }
}

/// Remembers whether the native cursor was hidden, so teardown can restore it
/// without touching a page that never hid it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeCursor {
    hidden: bool,
}

impl NativeCursor {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool, sink: &mut impl NativeCursorSink) {
        if self.hidden != hidden {
            self.hidden = hidden;
            sink.set_hidden(hidden);
        }
    }

    pub fn restore(&mut self, sink: &mut impl NativeCursorSink) {
        self.set_hidden(false, sink);
    }
}

#[derive(Debug, Clone)]
pub struct CursorController {
    enabled: bool,
    lerp: f64,
    pointer: Point,
    outline: Point,
    state: CursorState,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

impl CursorController {
    pub fn new(lerp: f64) -> Self {
        Self {
            enabled: true,
            lerp: lerp.clamp(0.0, 1.0),
            pointer: Point::default(),
            outline: Point::default(),
            state: CursorState::default(),
        }
    }

    /// Controller for coarse pointers. It ignores every event.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn outline(&self) -> Point {
        self.outline
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.enabled {
            self.pointer = Point::new(x, y);
        }
    }

    /// Returns true when the visible state changed.
    pub fn pointer_over(&mut self, path: &[HoverNode]) -> bool {
        if !self.enabled {
            return false;
        }
        self.set_state(resolve_hover(path))
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.enabled && self.set_state(CursorState::new(CursorVariant::Hidden, ""))
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.enabled && self.set_state(CursorState::default())
    }

    fn set_state(&mut self, state: CursorState) -> bool {
        if self.state == state {
            false
        } else {
            self.state = state;
            true
        }
    }

    /// Advance the outline one frame toward the pointer.
    pub fn tick(&mut self) -> Point {
        if self.enabled {
            self.outline.x += (self.pointer.x - self.outline.x) * self.lerp;
            self.outline.y += (self.pointer.y - self.outline.y) * self.lerp;
        }
        self.outline
    }
}
