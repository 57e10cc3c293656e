//! Team roster.

use crate::app;
use crate::model::TEAM_ROSTER;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use wristview::{Button, ButtonAction, ButtonConfig, View, ViewContext};

pub struct TeamScreen;

impl TeamScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeamScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TeamScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let lines: Vec<Line> = TEAM_ROSTER
            .iter()
            .map(|member| {
                Line::from(vec![
                    Span::raw(format!("  {:<14}", member.name)),
                    Span::styled(member.role, Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let roster = Paragraph::new(lines).block(
            Block::default()
                .title(" Team ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(roster, chunks[0]);

        let footer = Paragraph::new(" < home ")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::new().bind(Button::Left, ButtonAction::go_to(app::HOME))
    }
}
