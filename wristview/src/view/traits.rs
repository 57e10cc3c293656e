use crate::application::ViewContext;
use crate::button::{ButtonConfig, ScrollDirection};

/// A unit of displayable content.
///
/// The router owns at most one view at a time and drives it through this
/// lifecycle:
///
/// 1. [`prepare`](View::prepare) — while the previous view is still
///    displayed. The only fallible step; a view that cannot come up is
///    rejected here and the transition is abandoned with the old view
///    untouched.
/// 2. [`on_remove`](View::on_remove) on the *previous* view.
/// 3. [`on_mount`](View::on_mount) — the view is now current; its
///    [`button_config`](View::button_config) has been installed.
/// 4. [`render`](View::render) — once per frame while current.
pub trait View: Send + Sync + 'static {
    /// Validate and load whatever the view needs before it can be displayed.
    fn prepare(&mut self, cx: &mut ViewContext) -> crate::Result<()> {
        let _ = cx;
        Ok(())
    }

    /// Called once the view has become current.
    fn on_mount(&mut self, cx: &mut ViewContext) {
        let _ = cx;
    }

    /// Called when the view is replaced or the application shuts down.
    /// Abort background tasks and release anything held here.
    fn on_remove(&mut self, cx: &mut ViewContext) {
        let _ = cx;
    }

    /// Draw the view into the given frame.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext);

    /// The physical-button bindings active while this view is displayed.
    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::empty()
    }

    /// Handle a view-local scroll triggered by a bound button.
    fn on_scroll(&mut self, direction: ScrollDirection, cx: &mut ViewContext) {
        let _ = (direction, cx);
    }
}
