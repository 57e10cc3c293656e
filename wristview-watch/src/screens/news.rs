//! Headline feed.

use crate::app;
use crate::model::HEADLINES;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use wristview::{Button, ButtonAction, ButtonConfig, ScrollDirection, View, ViewContext};

pub struct NewsScreen {
    scroll: usize,
}

impl NewsScreen {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Default for NewsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for NewsScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let lines: Vec<Line> = HEADLINES
            .iter()
            .skip(self.scroll)
            .flat_map(|headline| {
                vec![
                    Line::from(Span::raw(headline.title)),
                    Line::styled(
                        format!("  -- {}", headline.source),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]
            })
            .collect();

        let feed = Paragraph::new(lines).block(
            Block::default()
                .title(" News ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(feed, chunks[0]);

        let footer = Paragraph::new(" < home | ^ up | v down ")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::new()
            .bind(Button::Left, ButtonAction::go_to(app::HOME))
            .bind(Button::Top, ButtonAction::ScrollUp)
            .bind(Button::Bottom, ButtonAction::ScrollDown)
    }

    fn on_scroll(&mut self, direction: ScrollDirection, _cx: &mut ViewContext) {
        match direction {
            ScrollDirection::Up => self.scroll = self.scroll.saturating_sub(1),
            ScrollDirection::Down => {
                self.scroll = (self.scroll + 1).min(HEADLINES.len().saturating_sub(1));
            }
        }
    }
}
