//! High-level application loop driving a terminal session.

use std::io::{self, stdout};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context as _;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::component::{Action, AnyComponent, Component, Event};

/// Application-wide handle available to every component.
#[derive(Clone)]
pub struct AppContext {
    /// The root component to render, once set by the user.
    root: Arc<Mutex<Option<Arc<Mutex<dyn AnyComponent>>>>>,
    /// Channel used to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    /// Install the root component of the application.
    pub fn set_root<C: Component>(&self, component: C) -> crate::Result<()> {
        let root: Arc<Mutex<dyn AnyComponent>> = Arc::new(Mutex::new(component));
        let mut guard = self.root.lock().map_err(|_| crate::Error::LockPoisoned)?;
        *guard = Some(root);
        drop(guard);
        self.refresh();
        Ok(())
    }

    /// Request a redraw.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }

    /// A context wired to no event loop; refresh requests are dropped.
    /// Intended for headless use and tests.
    pub fn detached() -> Self {
        let (re_render_tx, _) = mpsc::unbounded_channel();
        Self {
            root: Arc::new(Mutex::new(None)),
            re_render_tx,
        }
    }
}

/// A typed context passed to component methods.
pub struct Context<V: ?Sized> {
    pub app: AppContext,
    pub area: Rect,
    view: PhantomData<fn(&V)>,
}

impl<V: ?Sized> Context<V> {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self {
            app,
            area,
            view: PhantomData,
        }
    }

    /// Access the underlying [`AppContext`].
    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Re-type this context for a child component.
    pub fn cast<U: ?Sized>(&self) -> Context<U> {
        Context {
            app: self.app.clone(),
            area: self.area,
            view: PhantomData,
        }
    }

    /// Request a redraw.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Context passed to event handlers, identical to [`Context`] but named
/// for clarity.
pub type EventContext<V> = Context<V>;

/// Main application handle.
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Run the application: build the runtime, let `setup` install the
    /// root component, then drive the terminal session until a quit.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<()>,
    {
        let rt = Runtime::new().context("failed to start tokio runtime")?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let root = Arc::new(Mutex::new(None));
        let app_context = AppContext {
            root: Arc::clone(&root),
            re_render_tx,
        };

        let _guard = rt.enter();
        setup(&app_context)?;
        drop(_guard);

        let actual_root = {
            let guard = root
                .lock()
                .map_err(|_| anyhow::anyhow!("root mutex poisoned"))?;
            guard.clone().unwrap_or_else(|| Arc::new(Mutex::new(Placeholder)))
        };

        rt.block_on(async move { self.run_loop(app_context, actual_root, re_render_rx).await })
    }

    async fn run_loop(
        &self,
        app: AppContext,
        root: Arc<Mutex<dyn AnyComponent>>,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            event::EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        info!("terminal session started");

        // Lifecycle: mount the root once, then enter its current view.
        {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut guard = root
                .lock()
                .map_err(|_| anyhow::anyhow!("root mutex poisoned during mount"))?;
            let mut cx = Context::<dyn AnyComponent>::new(app.clone(), area);
            guard.on_mount_any(&mut cx);
            guard.on_enter_any(&mut cx);
        }

        let result = self.run_app_loop(app, &mut terminal, root, re_render_rx).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )?;
        terminal.show_cursor()?;
        info!("terminal session ended");

        result
    }

    async fn run_app_loop(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        root: Arc<Mutex<dyn AnyComponent>>,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        // Initial render
        let _ = app.re_render_tx.send(());

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let area = frame.area();
                        let mut cx = Context::<dyn AnyComponent>::new(app.clone(), area);
                        let mut guard = root.lock().expect("root mutex poisoned during render");
                        guard.render_any(frame, &mut cx);
                    })?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let mut cx = EventContext::<dyn AnyComponent>::new(app.clone(), area);

                            let mut guard = root
                                .lock()
                                .map_err(|_| anyhow::anyhow!("root mutex poisoned during event"))?;
                            let action = guard.handle_event_any(event, &mut cx);
                            app.refresh();

                            if let Some(action) = action {
                                debug!(?action, "root action");
                                if let Action::Quit = action {
                                    guard.on_shutdown_any(&mut cx);
                                    return Ok(());
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Rendered when no root component was installed.
struct Placeholder;

impl Component for Placeholder {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let paragraph = ratatui::widgets::Paragraph::new("no root component set")
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, cx.area);
    }
}
