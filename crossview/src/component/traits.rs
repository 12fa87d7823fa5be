use crate::application::{Context, EventContext};

/// Input delivered to a component by the application loop.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// What a component hands back after handling an event.
#[derive(Debug)]
pub enum Action {
    /// Open the view registered for the given request path.
    Navigate(String),
    /// Return to the previous view.
    Back,
    /// Leave the application.
    Quit,
    Noop,
}

/// The core trait every view implements.
///
/// Only `render` is required. The lifecycle hooks default to no-ops:
///
/// - `on_mount` runs once when the application starts.
/// - `on_enter` runs each time the view becomes the current one.
/// - `on_exit` runs each time the view stops being the current one.
///   Ephemeral view state is reset here, so re-entering a view always
///   observes freshly initialized state.
/// - `on_shutdown` runs once before the terminal session ends.
pub trait Component: Send + Sync + 'static {
    fn on_mount(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    fn on_enter(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    fn on_exit(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    fn on_shutdown(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    /// Render the component into the area carried by the context.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext<Self>) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// A dyn-compatible version of the [`Component`] trait, letting the
/// application loop hold a type-erased root.
pub trait AnyComponent: Send + Sync + 'static {
    fn on_mount_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn on_enter_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn on_exit_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn on_shutdown_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn render_any(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<dyn AnyComponent>);
    fn handle_event_any(
        &mut self,
        event: Event,
        cx: &mut EventContext<dyn AnyComponent>,
    ) -> Option<Action>;
}

impl<T: Component> AnyComponent for T {
    fn on_mount_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_mount(&mut cx);
    }

    fn on_enter_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_enter(&mut cx);
    }

    fn on_exit_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_exit(&mut cx);
    }

    fn on_shutdown_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_shutdown(&mut cx);
    }

    fn render_any(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.render(frame, &mut cx);
    }

    fn handle_event_any(
        &mut self,
        event: Event,
        cx: &mut EventContext<dyn AnyComponent>,
    ) -> Option<Action> {
        let mut cx = cx.cast::<Self>();
        self.handle_event(event, &mut cx)
    }
}
