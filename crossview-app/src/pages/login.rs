use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use crossview::{Action, Component, Context, Event, EventContext};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::debug;

use crate::widgets::Button;

/// Sign-in screen.
///
/// Owns the shell's single piece of local view state: a message line
/// that has no producer yet and therefore always renders empty. It is
/// cleared on exit, so re-entering the screen observes a fresh one.
pub struct LoginPage {
    message: String,
    submit: Button,
    submit_area: Rect,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            message: String::new(),
            submit: Button::new("Log In")
                .color(Color::Cyan)
                .text_color(Color::Black)
                .on_press(|| debug!("login submitted")),
            submit_area: Rect::default(),
        }
    }
}

impl LoginPage {
    /// The current message line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message line. Nothing in the shell calls this yet; a
    /// future producer must arrive with its own state-transition tests.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl Component for LoginPage {
    fn on_exit(&mut self, _cx: &mut Context<Self>) {
        self.message.clear();
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // heading
                Constraint::Length(1), // message line
                Constraint::Length(1), // spacer
                Constraint::Length(1), // button
                Constraint::Min(0),
                Constraint::Length(1), // footer
            ])
            .split(cx.area);

        let heading = Paragraph::new("Log In")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(heading, chunks[0]);

        let message = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);

        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(12),
                Constraint::Min(0),
            ])
            .split(chunks[3]);
        self.submit_area = button_row[1];
        self.submit.render(frame, self.submit_area);

        let footer = Paragraph::new(" Enter Log In │ Esc Back │ q Quit ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[5]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter => {
                    self.submit.press();
                    None
                }
                _ => super::common_keys(&key),
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self
                        .submit_area
                        .contains(Position::new(mouse.column, mouse.row))
                {
                    self.submit.press();
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use crossview::AppContext;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn cx() -> EventContext<LoginPage> {
        Context::new(AppContext::detached(), Rect::new(0, 0, 80, 24))
    }

    fn rendered(page: &mut LoginPage) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let mut cx = Context::new(AppContext::detached(), frame.area());
                page.render(frame, &mut cx);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn counting_page() -> (LoginPage, Arc<AtomicUsize>) {
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);
        let mut page = LoginPage::default();
        page.submit = Button::new("Log In").on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (page, presses)
    }

    #[test]
    fn message_is_initially_empty() {
        let page = LoginPage::default();
        assert_eq!(page.message(), "");
    }

    #[test]
    fn exit_clears_a_set_message() {
        let mut page = LoginPage::default();
        page.set_message("invalid credentials");

        page.on_exit(&mut cx());
        assert_eq!(page.message(), "");
    }

    #[test]
    fn renders_heading_and_button() {
        let mut page = LoginPage::default();
        let content = rendered(&mut page);
        assert!(content.contains("Log In"));
    }

    #[test]
    fn enter_presses_the_button_once() {
        let (mut page, presses) = counting_page();

        let action = page.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &mut cx(),
        );
        assert!(action.is_none());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mouse_click_inside_the_button_dispatches() {
        let (mut page, presses) = counting_page();
        rendered(&mut page); // populate submit_area

        let area = page.submit_area;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + area.width / 2,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        };
        page.handle_event(Event::Mouse(click), &mut cx());
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        // A click outside the button is ignored.
        let miss = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        page.handle_event(Event::Mouse(miss), &mut cx());
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }
}
