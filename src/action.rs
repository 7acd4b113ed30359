//! Actions revealed behind a swiped row.

use std::fmt;

use egui::Color32;

/// Callback run when an action button is pressed.
pub type ActionFn<'a> = Box<dyn FnMut() -> anyhow::Result<()> + 'a>;

/// Reference to the icon painted on an action button.
///
/// Icons are glyphs rendered with the current font; loading image assets is
/// left to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIcon {
    pub glyph: String,
    pub color: Color32,
}

impl ActionIcon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            color: Color32::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }
}

/// Result of invoking an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The callback ran and succeeded
    Completed,
    /// The action has no callback
    NoCallback,
    /// The callback returned an error
    Failed(String),
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ActionOutcome::Failed(_))
    }
}

/// One button of a row's action strip.
pub struct SwipeAction<'a> {
    /// Identifier reported back to the host when the action runs
    pub id: String,
    /// Button background
    pub color: Color32,
    pub icon: ActionIcon,
    on_invoke: Option<ActionFn<'a>>,
}

impl<'a> SwipeAction<'a> {
    pub fn new(id: impl Into<String>, color: Color32, icon: ActionIcon) -> Self {
        Self {
            id: id.into(),
            color,
            icon,
            on_invoke: None,
        }
    }

    /// Sets the callback run when the button is pressed.
    pub fn on_invoke(mut self, f: impl FnMut() -> anyhow::Result<()> + 'a) -> Self {
        self.on_invoke = Some(Box::new(f));
        self
    }

    pub fn has_callback(&self) -> bool {
        self.on_invoke.is_some()
    }

    /// Runs the callback, if any.
    pub fn invoke(&mut self) -> ActionOutcome {
        match self.on_invoke.as_mut() {
            None => ActionOutcome::NoCallback,
            Some(f) => match f() {
                Ok(()) => ActionOutcome::Completed,
                Err(e) => ActionOutcome::Failed(format!("{:#}", e)),
            },
        }
    }
}

impl fmt::Debug for SwipeAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("icon", &self.icon)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}
