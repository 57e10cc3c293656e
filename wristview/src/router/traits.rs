//! The view router: at most one view is displayed at a time, and every
//! transition tears the previous view down before the next one mounts.

use crate::application::{AppContext, ViewContext};
use crate::button::{Button, ButtonAction, ButtonConfig, ScrollDirection};
use crate::error::UnknownRouteSnafu;
use crate::view::View;
use std::collections::HashMap;

/// Builds a view for a registered path.
pub type ViewFactory = Box<dyn Fn(&AppContext) -> Box<dyn View> + Send + Sync>;

/// What the application loop should do after a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the current view and the active button bindings.
///
/// The router is an explicit instance threaded through the application loop,
/// not a global. Transitions are two-phase: the incoming view is prepared
/// first, and only once it has succeeded is the outgoing view torn down, so
/// a failed transition leaves the display and the button table exactly as
/// they were.
///
/// # Example
/// ```ignore
/// let mut router = Router::new()
///     .route("/", |_| Box::new(HomeScreen::new()))
///     .route("/contacts", |_| Box::new(ContactsScreen::new()))
///     .starts_at("/");
/// router.go_to("/contacts", &mut cx)?;
/// ```
pub struct Router {
    current: Option<Box<dyn View>>,
    buttons: ButtonConfig,
    routes: HashMap<String, ViewFactory>,
    initial: Option<String>,
}

impl Router {
    /// Create a router with no current view and no routes.
    pub fn new() -> Self {
        Self {
            current: None,
            buttons: ButtonConfig::empty(),
            routes: HashMap::new(),
            initial: None,
        }
    }

    /// Register a view factory under a path.
    pub fn route<F>(mut self, path: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&AppContext) -> Box<dyn View> + Send + Sync + 'static,
    {
        self.routes.insert(path.into(), Box::new(factory));
        self
    }

    /// Path the application loop navigates to once the display is up.
    pub fn starts_at(mut self, path: impl Into<String>) -> Self {
        self.initial = Some(path.into());
        self
    }

    /// Consume the configured initial path, if any.
    pub fn take_initial(&mut self) -> Option<String> {
        self.initial.take()
    }

    /// Whether a view is currently displayed.
    pub fn has_view(&self) -> bool {
        self.current.is_some()
    }

    /// The currently displayed view, if any.
    pub fn current(&self) -> Option<&dyn View> {
        self.current.as_deref()
    }

    /// The button bindings of the current view.
    pub fn buttons(&self) -> &ButtonConfig {
        &self.buttons
    }

    /// Resolve a registered path and transition to its view.
    pub fn go_to(&mut self, path: &str, cx: &mut ViewContext) -> crate::Result<()> {
        let view = match self.routes.get(path) {
            Some(factory) => factory(cx.app()),
            None => return UnknownRouteSnafu { path }.fail(),
        };
        tracing::debug!(%path, "view change");
        self.change_view(view, cx)
    }

    /// The transition primitive.
    ///
    /// Prepares the incoming view while the old one is still displayed; on
    /// success tears the old view down, then mounts the new view and installs
    /// its button bindings. The teardown of the old view always completes
    /// before the new view mounts or renders.
    pub fn change_view(&mut self, mut view: Box<dyn View>, cx: &mut ViewContext) -> crate::Result<()> {
        view.prepare(cx)?;

        if let Some(mut old) = self.current.take() {
            old.on_remove(cx);
        }

        view.on_mount(cx);
        self.buttons = view.button_config();
        self.current = Some(view);
        cx.notify();
        Ok(())
    }

    /// Dispatch a physical button press through the active bindings.
    pub fn press(&mut self, button: Button, cx: &mut ViewContext) -> crate::Result<Flow> {
        let action = match self.buttons.action(button) {
            Some(action) => action.clone(),
            None => return Ok(Flow::Continue),
        };

        match action {
            ButtonAction::GoTo(path) => {
                self.go_to(&path, cx)?;
                Ok(Flow::Continue)
            }
            ButtonAction::ScrollUp => {
                self.scroll(ScrollDirection::Up, cx);
                Ok(Flow::Continue)
            }
            ButtonAction::ScrollDown => {
                self.scroll(ScrollDirection::Down, cx);
                Ok(Flow::Continue)
            }
            ButtonAction::Quit => Ok(Flow::Quit),
        }
    }

    /// Draw the current view, or a placeholder when nothing is mounted.
    pub fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        match self.current.as_mut() {
            Some(view) => view.render(frame, cx),
            None => {
                let placeholder = ratatui::widgets::Paragraph::new("No view mounted")
                    .alignment(ratatui::layout::Alignment::Center);
                frame.render_widget(placeholder, cx.area);
            }
        }
    }

    /// Tear down the current view on application exit.
    pub fn shutdown(&mut self, cx: &mut ViewContext) {
        if let Some(mut view) = self.current.take() {
            view.on_remove(cx);
        }
        self.buttons = ButtonConfig::empty();
    }

    fn scroll(&mut self, direction: ScrollDirection, cx: &mut ViewContext) {
        if let Some(view) = self.current.as_mut() {
            view.on_scroll(direction, cx);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Define one navigation shortcut per destination, plus a path constant for
/// each.
///
/// Expands to a `NamedRoutes` trait implemented for [`Router`], where each
/// method resolves its destination and delegates to
/// [`Router::go_to`].
///
/// # Example
/// ```ignore
/// wristview::named_routes! {
///     home => "/",
///     contacts => "/contacts",
/// }
///
/// // Generates `HOME`, `CONTACTS`, and:
/// // trait NamedRoutes { fn home(..); fn contacts(..); }
/// router.home(&mut cx)?;
/// ```
#[macro_export]
macro_rules! named_routes {
    ($($name:ident => $path:expr),+ $(,)?) => {
        $crate::paste::paste! {
            $(pub const [<$name:upper>]: &str = $path;)+

            /// Navigation shortcuts, one method per destination.
            pub trait NamedRoutes {
                $(fn $name(&mut self, cx: &mut $crate::ViewContext) -> $crate::Result<()>;)+
            }

            impl NamedRoutes for $crate::Router {
                $(
                    fn $name(&mut self, cx: &mut $crate::ViewContext) -> $crate::Result<()> {
                        self.go_to([<$name:upper>], cx)
                    }
                )+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AppContext, ViewContext};
    use crate::button::{Button, ButtonAction, ButtonConfig, ScrollDirection};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;
    use std::sync::{Arc, Mutex};

    type Journal = Arc<Mutex<Vec<String>>>;

    /// Test double recording every lifecycle call it receives.
    struct Probe {
        label: &'static str,
        journal: Journal,
        buttons: ButtonConfig,
        fail_prepare: bool,
    }

    impl Probe {
        fn new(label: &'static str, journal: Journal) -> Self {
            Self {
                label,
                journal,
                buttons: ButtonConfig::empty(),
                fail_prepare: false,
            }
        }

        fn with_buttons(mut self, buttons: ButtonConfig) -> Self {
            self.buttons = buttons;
            self
        }

        fn failing_prepare(mut self) -> Self {
            self.fail_prepare = true;
            self
        }

        fn record(&self, event: &str) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, event));
        }
    }

    impl View for Probe {
        fn prepare(&mut self, _cx: &mut ViewContext) -> crate::Result<()> {
            self.record("prepare");
            if self.fail_prepare {
                return Err(crate::Error::prepare("probe refused"));
            }
            Ok(())
        }

        fn on_mount(&mut self, _cx: &mut ViewContext) {
            self.record("mount");
        }

        fn on_remove(&mut self, _cx: &mut ViewContext) {
            self.record("remove");
        }

        fn render(&mut self, _frame: &mut ratatui::Frame, _cx: &mut ViewContext) {
            self.record("render");
        }

        fn button_config(&self) -> ButtonConfig {
            self.buttons.clone()
        }

        fn on_scroll(&mut self, direction: ScrollDirection, _cx: &mut ViewContext) {
            match direction {
                ScrollDirection::Up => self.record("scroll-up"),
                ScrollDirection::Down => self.record("scroll-down"),
            }
        }
    }

    fn test_cx() -> ViewContext {
        ViewContext::new(AppContext::detached(), Rect::new(0, 0, 40, 20))
    }

    fn journal() -> Journal {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().unwrap().clone()
    }

    #[test]
    fn first_change_mounts_without_teardown() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        assert!(!router.has_view());
        router
            .change_view(Box::new(Probe::new("a", journal.clone())), &mut cx)
            .unwrap();

        assert!(router.has_view());
        assert_eq!(entries(&journal), vec!["a:prepare", "a:mount"]);
    }

    #[test]
    fn second_change_tears_down_the_old_view_first() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        router
            .change_view(Box::new(Probe::new("a", journal.clone())), &mut cx)
            .unwrap();
        router
            .change_view(Box::new(Probe::new("b", journal.clone())), &mut cx)
            .unwrap();

        // The old view is removed after the new one proved it can come up,
        // and strictly before the new one mounts.
        assert_eq!(
            entries(&journal),
            vec!["a:prepare", "a:mount", "b:prepare", "a:remove", "b:mount"]
        );
        assert!(router.has_view());
    }

    #[test]
    fn change_installs_the_new_button_config() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        let a_buttons = ButtonConfig::new().bind(Button::Left, ButtonAction::go_to("/a"));
        let b_buttons = ButtonConfig::new().bind(Button::Right, ButtonAction::ScrollDown);

        router
            .change_view(
                Box::new(Probe::new("a", journal.clone()).with_buttons(a_buttons.clone())),
                &mut cx,
            )
            .unwrap();
        assert_eq!(router.buttons(), &a_buttons);

        router
            .change_view(
                Box::new(Probe::new("b", journal.clone()).with_buttons(b_buttons.clone())),
                &mut cx,
            )
            .unwrap();
        assert_eq!(router.buttons(), &b_buttons);
    }

    #[test]
    fn failed_prepare_leaves_the_old_view_in_place() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        let a_buttons = ButtonConfig::new().bind(Button::Screen, ButtonAction::Quit);
        router
            .change_view(
                Box::new(Probe::new("a", journal.clone()).with_buttons(a_buttons.clone())),
                &mut cx,
            )
            .unwrap();

        let err = router
            .change_view(
                Box::new(Probe::new("b", journal.clone()).failing_prepare()),
                &mut cx,
            )
            .unwrap_err();
        assert!(matches!(err, crate::Error::ViewPrepare { .. }));

        // No teardown happened and the old bindings still dispatch.
        assert_eq!(
            entries(&journal),
            vec!["a:prepare", "a:mount", "b:prepare"]
        );
        assert!(router.has_view());
        assert_eq!(router.buttons(), &a_buttons);
        assert_eq!(router.press(Button::Screen, &mut cx).unwrap(), Flow::Quit);
    }

    #[test]
    fn go_to_rejects_unregistered_paths() {
        let mut router = Router::new();
        let mut cx = test_cx();

        let err = router.go_to("/missing", &mut cx).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownRoute { .. }));
        assert!(!router.has_view());
    }

    #[test]
    fn go_to_builds_the_registered_view() {
        let journal = journal();
        let factory_journal = journal.clone();
        let mut router =
            Router::new().route("/a", move |_| Box::new(Probe::new("a", factory_journal.clone())));
        let mut cx = test_cx();

        router.go_to("/a", &mut cx).unwrap();

        assert!(router.has_view());
        assert_eq!(entries(&journal), vec!["a:prepare", "a:mount"]);
    }

    #[test]
    fn press_navigates_through_a_goto_binding() {
        let journal = journal();
        let factory_journal = journal.clone();
        let b_buttons = ButtonConfig::new().bind(Button::Left, ButtonAction::go_to("/a"));
        let mut router = Router::new().route("/b", move |_| {
            Box::new(Probe::new("b", factory_journal.clone()).with_buttons(b_buttons.clone()))
        });
        let mut cx = test_cx();

        router.go_to("/b", &mut cx).unwrap();
        // "/a" is not registered, so the press surfaces the routing error
        // and the current view stays put.
        let err = router.press(Button::Left, &mut cx).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownRoute { .. }));
        assert!(router.has_view());
    }

    #[test]
    fn press_scrolls_the_current_view() {
        let journal = journal();
        let buttons = ButtonConfig::new()
            .bind(Button::Top, ButtonAction::ScrollUp)
            .bind(Button::Bottom, ButtonAction::ScrollDown);
        let mut router = Router::new();
        let mut cx = test_cx();

        router
            .change_view(
                Box::new(Probe::new("a", journal.clone()).with_buttons(buttons)),
                &mut cx,
            )
            .unwrap();
        router.press(Button::Bottom, &mut cx).unwrap();
        router.press(Button::Top, &mut cx).unwrap();

        assert_eq!(
            entries(&journal),
            vec!["a:prepare", "a:mount", "a:scroll-down", "a:scroll-up"]
        );
    }

    #[test]
    fn unbound_press_is_inert() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        router
            .change_view(Box::new(Probe::new("a", journal.clone())), &mut cx)
            .unwrap();

        assert_eq!(router.press(Button::Right, &mut cx).unwrap(), Flow::Continue);
        assert_eq!(entries(&journal), vec!["a:prepare", "a:mount"]);
    }

    #[test]
    fn render_draws_the_current_view() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        // Empty router draws the placeholder without panicking.
        terminal
            .draw(|frame| {
                let mut cx = test_cx();
                router.render(frame, &mut cx);
            })
            .unwrap();

        router
            .change_view(Box::new(Probe::new("a", journal.clone())), &mut cx)
            .unwrap();
        terminal
            .draw(|frame| {
                let mut cx = test_cx();
                router.render(frame, &mut cx);
            })
            .unwrap();

        assert_eq!(entries(&journal), vec!["a:prepare", "a:mount", "a:render"]);
    }

    #[test]
    fn shutdown_tears_down_the_current_view() {
        let journal = journal();
        let mut router = Router::new();
        let mut cx = test_cx();

        router
            .change_view(Box::new(Probe::new("a", journal.clone())), &mut cx)
            .unwrap();
        router.shutdown(&mut cx);

        assert!(!router.has_view());
        assert!(router.buttons().is_empty());
        assert_eq!(entries(&journal), vec!["a:prepare", "a:mount", "a:remove"]);
    }

    mod named {
        use super::*;

        crate::named_routes! {
            home => "/",
            contacts => "/contacts",
        }

        #[test]
        fn shortcuts_delegate_to_their_paths() {
            assert_eq!(HOME, "/");
            assert_eq!(CONTACTS, "/contacts");

            let journal = journal();
            let home_journal = journal.clone();
            let contacts_journal = journal.clone();
            let mut router = Router::new()
                .route(HOME, move |_| Box::new(Probe::new("home", home_journal.clone())))
                .route(CONTACTS, move |_| {
                    Box::new(Probe::new("contacts", contacts_journal.clone()))
                });
            let mut cx = test_cx();

            router.home(&mut cx).unwrap();
            router.contacts(&mut cx).unwrap();

            assert_eq!(
                entries(&journal),
                vec![
                    "home:prepare",
                    "home:mount",
                    "contacts:prepare",
                    "home:remove",
                    "contacts:mount"
                ]
            );
        }
    }
}
