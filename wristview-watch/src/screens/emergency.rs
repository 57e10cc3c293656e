//! Emergency prompt: tap the face to confirm, press left to cancel.

use crate::app;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use wristview::{Button, ButtonAction, ButtonConfig, View, ViewContext};

pub struct EmergencyScreen;

impl EmergencyScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmergencyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for EmergencyScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        let lines = vec![
            Line::from(""),
            Line::from("Send"),
            Line::styled(
                "EMERGENCY",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from("beacon?"),
            Line::from(""),
            Line::styled("Tap to confirm", Style::default().fg(Color::White)),
            Line::styled("<< press left to Cancel", Style::default().fg(Color::DarkGray)),
        ];

        let prompt = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(prompt, cx.area);
    }

    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::new()
            .bind(Button::Left, ButtonAction::go_to(app::HOME))
            .bind(
                Button::Screen,
                ButtonAction::go_to(app::EMERGENCY_CONFIRMATION),
            )
    }
}
