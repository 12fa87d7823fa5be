use crossview::{Action, Component, Context, Event, EventContext};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Placeholder screen; there is no asynchronous work behind it.
#[derive(Debug, Default)]
pub struct LoadingPage;

impl Component for LoadingPage {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let lines = vec![
            Line::from(""),
            Line::styled("Loading…", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::styled(
                "(nothing is actually loading)",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let body = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(body, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => super::common_keys(&key),
            _ => None,
        }
    }
}
