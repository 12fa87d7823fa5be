use crossview::{Action, Component, Context, Event, EventContext};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::widgets::Button;

/// Registration screen. The submit control is disabled until something
/// exists to submit to.
pub struct SignUpPage {
    submit: Button,
}

impl Default for SignUpPage {
    fn default() -> Self {
        Self {
            submit: Button::new("Create Account").disabled(true),
        }
    }
}

impl Component for SignUpPage {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        let heading = Paragraph::new("Sign Up")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(heading, chunks[0]);

        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(18),
                Constraint::Min(0),
            ])
            .split(chunks[2]);
        self.submit.render(frame, button_row[1]);

        let footer = Paragraph::new(" Esc Back │ q Quit ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[4]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                crossterm::event::KeyCode::Enter => {
                    // Disabled: never dispatches.
                    self.submit.press();
                    None
                }
                _ => super::common_keys(&key),
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crossview::AppContext;
    use ratatui::layout::Rect;

    #[test]
    fn enter_on_a_disabled_button_does_nothing() {
        let mut page = SignUpPage::default();
        let mut cx: EventContext<SignUpPage> =
            Context::new(AppContext::detached(), Rect::new(0, 0, 80, 24));

        let action = page.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &mut cx,
        );
        assert!(action.is_none());
        assert!(page.submit.is_disabled());
    }
}
