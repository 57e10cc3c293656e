//! Watch face: clock, date and a scrollable notice panel.

use crate::app;
use crate::model::BeaconState;
use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use wristview::{
    Button, ButtonAction, ButtonConfig, Entity, ScrollDirection, TaskTracker, View, ViewContext,
};

const NOTICES: &[&str] = &[
    "Check in with base before 18:00",
    "Battery saver engages below 20%",
    "Weather window closes this evening",
    "Sync contacts when back in range",
    "Tap the face to raise an emergency",
];

pub struct HomeScreen {
    beacon: Entity<BeaconState>,
    scroll: usize,
    tasks: TaskTracker,
}

impl HomeScreen {
    pub fn new(beacon: Entity<BeaconState>) -> Self {
        Self {
            beacon,
            scroll: 0,
            tasks: TaskTracker::new(),
        }
    }
}

impl View for HomeScreen {
    fn on_mount(&mut self, cx: &mut ViewContext) {
        // Tick once a second so the clock stays current.
        let handle = cx.app.spawn_tracked(|app| async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                app.refresh();
            }
        });
        self.tasks.track(handle);
    }

    fn on_remove(&mut self, _cx: &mut ViewContext) {
        self.tasks.abort_all();
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        cx.subscribe(&self.beacon);

        let now = Local::now();
        let beacon_sent = self.beacon.read(|s| s.last.is_some()).unwrap_or(false);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        let mut clock_lines = vec![
            Line::from(""),
            Line::styled(
                now.format("%H:%M:%S").to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                now.format("%a %d %b %Y").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if beacon_sent {
            clock_lines.push(Line::styled(
                "! beacon sent",
                Style::default().fg(Color::Red),
            ));
        }
        let clock = Paragraph::new(clock_lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(clock, chunks[0]);

        let notice_lines: Vec<Line> = NOTICES
            .iter()
            .skip(self.scroll)
            .map(|notice| Line::from(vec![Span::raw("  "), Span::raw(*notice)]))
            .collect();
        let notices = Paragraph::new(notice_lines).block(
            Block::default()
                .title(" Notices ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(notices, chunks[1]);

        let footer = Paragraph::new(" < team | > contacts | ^ news | v scroll | tap: emergency ")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::new()
            .bind(Button::Left, ButtonAction::go_to(app::TEAM))
            .bind(Button::Right, ButtonAction::go_to(app::CONTACTS))
            .bind(Button::Top, ButtonAction::go_to(app::NEWS))
            .bind(Button::Bottom, ButtonAction::ScrollDown)
            .bind(Button::Screen, ButtonAction::go_to(app::EMERGENCY))
    }

    fn on_scroll(&mut self, direction: ScrollDirection, _cx: &mut ViewContext) {
        match direction {
            ScrollDirection::Up => self.scroll = self.scroll.saturating_sub(1),
            ScrollDirection::Down => {
                self.scroll = (self.scroll + 1).min(NOTICES.len().saturating_sub(1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use wristview::AppContext;

    fn screen() -> HomeScreen {
        HomeScreen::new(Entity::new(BeaconState::default()))
    }

    #[test]
    fn left_button_goes_to_the_team_page() {
        let config = screen().button_config();
        assert_eq!(
            config.action(Button::Left),
            Some(&ButtonAction::go_to("/team"))
        );
    }

    #[test]
    fn right_button_goes_to_the_contacts_page() {
        let config = screen().button_config();
        assert_eq!(
            config.action(Button::Right),
            Some(&ButtonAction::go_to("/contacts"))
        );
    }

    #[test]
    fn top_button_goes_to_the_news_page() {
        let config = screen().button_config();
        assert_eq!(
            config.action(Button::Top),
            Some(&ButtonAction::go_to("/news"))
        );
    }

    #[test]
    fn bottom_button_scrolls_the_page_down() {
        let config = screen().button_config();
        assert_eq!(config.action(Button::Bottom), Some(&ButtonAction::ScrollDown));
    }

    #[test]
    fn scrolling_stays_within_the_notices() {
        let mut home = screen();
        let mut cx = ViewContext::new(AppContext::detached(), Rect::new(0, 0, 28, 28));

        home.on_scroll(ScrollDirection::Up, &mut cx);
        assert_eq!(home.scroll, 0);

        for _ in 0..NOTICES.len() + 3 {
            home.on_scroll(ScrollDirection::Down, &mut cx);
        }
        assert_eq!(home.scroll, NOTICES.len() - 1);
    }
}
