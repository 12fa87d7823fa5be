//! Reusable push-button widget.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const DEFAULT_COLOR: Color = Color::Blue;
const DEFAULT_TEXT_COLOR: Color = Color::White;

/// A clickable, parameterized control.
///
/// `content` is required and must be non-blank; everything else has a
/// default. When enabled and wired with a callback, [`Button::press`]
/// dispatches exactly one activation per call; pressing an unwired or
/// disabled button is a no-op.
pub struct Button {
    content: String,
    color: Color,
    text_color: Color,
    disabled: bool,
    on_press: Option<Box<dyn FnMut() + Send + Sync>>,
}

impl Button {
    /// Create a button with the given label.
    ///
    /// # Panics
    /// Panics when `content` is blank. An invisible control is a
    /// construction bug, not a runtime condition.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "a button needs visible content");
        Self {
            content,
            color: DEFAULT_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            disabled: false,
            on_press: None,
        }
    }

    /// Fill color. Defaults to blue.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Label color. Defaults to white.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Disable the button. A disabled button never dispatches.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach the activation callback.
    pub fn on_press(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Dispatch one activation. Returns whether the callback ran.
    pub fn press(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        match self.on_press.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Draw the button into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default().bg(Color::DarkGray).fg(Color::Gray)
        } else {
            Style::default()
                .bg(self.color)
                .fg(self.text_color)
                .add_modifier(Modifier::BOLD)
        };
        let label = Paragraph::new(Line::from(self.content.as_str()))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(label, area);
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("content", &self.content)
            .field("disabled", &self.disabled)
            .field("wired", &self.on_press.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_button(label: &str) -> (Button, Arc<AtomicUsize>) {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);
        let button = Button::new(label).on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (button, presses)
    }

    #[test]
    fn press_dispatches_exactly_once() {
        let (mut button, presses) = counting_button("Submit");

        assert!(button.press());
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        assert!(button.press());
        assert_eq!(presses.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn press_without_a_callback_is_a_no_op() {
        let mut button = Button::new("Submit");
        assert!(!button.press());
    }

    #[test]
    fn disabled_button_never_dispatches() {
        let (button, presses) = counting_button("Submit");
        let mut button = button.disabled(true);

        assert!(!button.press());
        assert_eq!(presses.load(Ordering::SeqCst), 0);
    }

    #[test]
    #[should_panic(expected = "visible content")]
    fn blank_content_fails_construction() {
        let _ = Button::new("   ");
    }

    #[test]
    fn renders_its_content() {
        let button = Button::new("Submit");

        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                button.render(frame, Rect::new(0, 1, 20, 1));
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Submit"), "missing label in: {content}");
    }

    #[test]
    fn disabled_button_still_shows_its_content() {
        let button = Button::new("Create Account").disabled(true);

        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                button.render(frame, area);
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Create Account"));
    }
}
