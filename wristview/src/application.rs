//! Application loop: terminal setup, input mapping and redraw scheduling.

use crate::button::Button;
use crate::router::{Flow, Router};
use crate::state::Entity;
use crate::task::TaskHandle;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// Clonable handle to global services: entity creation, task spawning and
/// redraw scheduling.
#[derive(Clone)]
pub struct AppContext {
    /// Internal: channel to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    fn new(re_render_tx: mpsc::UnboundedSender<()>) -> Self {
        Self { re_render_tx }
    }

    /// A context not attached to a running loop. Redraw requests go nowhere;
    /// everything else works. Useful for headless drivers and tests.
    pub fn detached() -> Self {
        let (tx, _rx) = mpsc::unbounded_channel();
        Self::new(tx)
    }

    /// Create a new entity with the given value.
    pub fn new_entity<T>(&self, value: T) -> Entity<T>
    where
        T: Send + Sync + 'static,
    {
        Entity::new(value)
    }

    /// Spawn a background task with access to the context.
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(AppContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let cx = self.clone();
        tokio::spawn(async move {
            f(cx).await;
        });
    }

    /// Spawn a background task and return an abortable handle, for tasks
    /// tied to a view's lifetime (see [`TaskTracker`](crate::TaskTracker)).
    pub fn spawn_tracked<F, Fut>(&self, f: F) -> TaskHandle
    where
        F: FnOnce(AppContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let cx = self.clone();
        let join = tokio::spawn(async move {
            f(cx).await;
        });
        TaskHandle::new(join.abort_handle())
    }

    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// Context passed to view methods: the app handle plus the display area.
pub struct ViewContext {
    pub app: AppContext,
    pub area: Rect,
}

impl ViewContext {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Redraw whenever the entity changes, for as long as it lives.
    pub fn subscribe<T>(&self, entity: &Entity<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut rx = entity.subscribe();
        let tx = self.app.re_render_tx.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let _ = tx.send(());
            }
        });
    }

    /// Explicitly trigger a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Main application handle.
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Run the application. `setup` builds the router (routes, shared
    /// entities, initial path) against a live context; the loop then owns
    /// the router exclusively, so every view transition runs to completion
    /// before the next input is looked at.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<Router>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {e}"))?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let app_context = AppContext::new(re_render_tx);

        let guard = rt.enter();
        let router = setup(&app_context)?;
        drop(guard);

        rt.block_on(self.run_loop(app_context, router, re_render_rx))
    }

    async fn run_loop(
        &self,
        app: AppContext,
        router: Router,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self
            .run_app_loop(app, &mut terminal, router, re_render_rx)
            .await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app_loop(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut router: Router,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        // Mount the initial view now that the display exists.
        {
            let mut cx = ViewContext::new(app.clone(), terminal_area(terminal)?);
            if let Some(path) = router.take_initial() {
                if let Err(err) = router.go_to(&path, &mut cx) {
                    tracing::warn!(%path, %err, "initial navigation failed");
                }
            }
        }

        // Initial render
        app.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let mut cx = ViewContext::new(app.clone(), frame.area());
                        router.render(frame, &mut cx);
                    })?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                let mut cx = ViewContext::new(app.clone(), terminal_area(terminal)?);
                                let button = match key.code {
                                    KeyCode::Left => Some(Button::Left),
                                    KeyCode::Right => Some(Button::Right),
                                    KeyCode::Up => Some(Button::Top),
                                    KeyCode::Down => Some(Button::Bottom),
                                    KeyCode::Enter => Some(Button::Screen),
                                    KeyCode::Char('q') => {
                                        router.shutdown(&mut cx);
                                        return Ok(());
                                    }
                                    _ => None,
                                };

                                if let Some(button) = button {
                                    match router.press(button, &mut cx) {
                                        Ok(Flow::Quit) => {
                                            router.shutdown(&mut cx);
                                            return Ok(());
                                        }
                                        Ok(Flow::Continue) => {}
                                        // A failed transition leaves the previous
                                        // view displayed and bound.
                                        Err(err) => tracing::warn!(%button, %err, "navigation failed"),
                                    }
                                    app.refresh();
                                }
                            }
                            CrosstermEvent::Resize(_, _) => app.refresh(),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal_area(terminal: &Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}
