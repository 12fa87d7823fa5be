use crossview::{Action, Component, Context, Event, EventContext};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Fallback screen for request paths nothing is registered under.
/// Deliberately bland and deterministic: navigation to a dead path is an
/// expected event, not an error.
#[derive(Debug, Default)]
pub struct NotFoundPage {
    requested: String,
}

impl NotFoundPage {
    /// Record the path that failed to resolve, for display.
    pub fn set_requested(&mut self, path: &str) {
        self.requested = path.to_string();
    }
}

impl Component for NotFoundPage {
    fn on_exit(&mut self, _cx: &mut Context<Self>) {
        self.requested.clear();
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        let heading = Paragraph::new("Not Found")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(heading, chunks[0]);

        let mut lines = vec![
            Line::from(""),
            Line::from("No view is registered for the requested path."),
        ];
        if !self.requested.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                self.requested.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let body = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(body, chunks[1]);

        let footer = Paragraph::new(" Esc Back │ q Quit ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => super::common_keys(&key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossview::AppContext;
    use ratatui::layout::Rect;

    #[test]
    fn requested_path_is_cleared_on_exit() {
        let mut page = NotFoundPage::default();
        page.set_requested("/missing");
        assert_eq!(page.requested, "/missing");

        let mut cx: Context<NotFoundPage> =
            Context::new(AppContext::detached(), Rect::new(0, 0, 80, 24));
        page.on_exit(&mut cx);
        assert_eq!(page.requested, "");
    }
}
