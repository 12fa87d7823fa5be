use crossterm::event::KeyCode;
use crossview::{Action, Component, Context, Event, EventContext};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

/// Landing screen: the hub listing every navigable destination.
pub struct HomePage {
    selected: usize,
    links: Vec<(&'static str, &'static str)>, // (label, request path)
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            selected: 0,
            links: vec![
                ("History", "/history"),
                ("Loading", "/loading"),
                ("Log In", "/login"),
                ("Sign Up", "/signup"),
                ("Result", "/result"),
            ],
        }
    }
}

impl Component for HomePage {
    fn on_exit(&mut self, _cx: &mut Context<Self>) {
        self.selected = 0;
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

        let title = Paragraph::new("Home")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, (label, path))| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▶ " } else { "  " };
                let label_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let line = Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::Cyan)),
                    Span::styled(*label, label_style),
                    Span::styled(format!("  {path}"), Style::default().fg(Color::DarkGray)),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Where to? ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[1]);

        let footer = Paragraph::new(" ↑/↓ Select │ Enter Open │ q Quit ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = if self.selected == 0 {
                        self.links.len() - 1
                    } else {
                        self.selected - 1
                    };
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1) % self.links.len();
                    None
                }
                KeyCode::Enter => {
                    let (_, path) = self.links[self.selected];
                    Some(Action::Navigate(path.to_string()))
                }
                _ => super::common_keys(&key),
            },
            _ => None,
        }
    }
}
