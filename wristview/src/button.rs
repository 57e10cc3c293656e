//! Physical input model.
//!
//! A wearable exposes a handful of discrete inputs: four edge buttons and a
//! tap on the face. Each view declares what those inputs do while it is
//! displayed via a [`ButtonConfig`]; the router installs that config
//! alongside the view, so the active dispatch table is ordinary router state
//! rather than a mutable global.

/// One of the device's physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Top,
    Bottom,
    /// Tap on the watch face.
    Screen,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Left,
        Button::Right,
        Button::Top,
        Button::Bottom,
        Button::Screen,
    ];

    fn index(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Top => 2,
            Button::Bottom => 3,
            Button::Screen => 4,
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
            Button::Top => "TOP",
            Button::Bottom => "BOTTOM",
            Button::Screen => "SCREEN",
        };
        write!(f, "{name}")
    }
}

/// What a button press does while its view is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Navigate to the view registered under the given path.
    GoTo(String),
    /// Scroll the current view up. Never touches the router.
    ScrollUp,
    /// Scroll the current view down. Never touches the router.
    ScrollDown,
    /// Leave the application.
    Quit,
}

impl ButtonAction {
    pub fn go_to(path: impl Into<String>) -> Self {
        ButtonAction::GoTo(path.into())
    }
}

/// Direction handed to [`View::on_scroll`](crate::View::on_scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A view's bindings for the physical buttons.
///
/// Partial by design: most screens bind two or three buttons and leave the
/// rest inert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonConfig {
    bindings: [Option<ButtonAction>; 5],
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with every button unbound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bind `button` to `action`, replacing any previous binding.
    pub fn bind(mut self, button: Button, action: ButtonAction) -> Self {
        self.bindings[button.index()] = Some(action);
        self
    }

    /// The action bound to `button`, if any.
    pub fn action(&self, button: Button) -> Option<&ButtonAction> {
        self.bindings[button.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.iter().all(Option::is_none)
    }
}
