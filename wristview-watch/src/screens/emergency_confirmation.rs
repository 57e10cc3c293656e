//! Beacon dispatch confirmation.
//!
//! The transition to this screen is what sends the beacon: `prepare`
//! acquires a position fix (refusing the transition when none is
//! available, which keeps the prompt on screen), and `on_mount` records
//! and logs the dispatch.

use crate::app;
use crate::location::{self, Fix};
use crate::model::{BeaconDispatch, BeaconState};
use chrono::Local;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use wristview::{Button, ButtonAction, ButtonConfig, Entity, View, ViewContext};

pub struct EmergencyConfirmationScreen {
    beacon: Entity<BeaconState>,
    fix: Option<Fix>,
}

impl EmergencyConfirmationScreen {
    pub fn new(beacon: Entity<BeaconState>) -> Self {
        Self { beacon, fix: None }
    }
}

impl View for EmergencyConfirmationScreen {
    fn prepare(&mut self, _cx: &mut ViewContext) -> wristview::Result<()> {
        match location::current_fix() {
            Some(fix) => {
                self.fix = Some(fix);
                Ok(())
            }
            None => Err(wristview::Error::prepare("no position fix available")),
        }
    }

    fn on_mount(&mut self, _cx: &mut ViewContext) {
        if let Some(fix) = self.fix {
            let dispatch = BeaconDispatch {
                fix,
                sent_at: Local::now(),
            };
            tracing::info!(
                latitude = fix.latitude,
                longitude = fix.longitude,
                sent_at = %dispatch.sent_at,
                "emergency beacon dispatched"
            );
            let _ = self.beacon.update(|state| state.last = Some(dispatch));
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        cx.subscribe(&self.beacon);
        let last = self.beacon.read(|state| state.last.clone()).unwrap_or(None);

        let mut lines = vec![
            Line::from(""),
            Line::styled(
                "EMERGENCY beacon sent",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
        ];
        match last {
            Some(dispatch) => {
                lines.push(Line::from(format!(
                    "lat {:.7}  lon {:.7}",
                    dispatch.fix.latitude, dispatch.fix.longitude
                )));
                lines.push(Line::styled(
                    dispatch.sent_at.format("%H:%M:%S %d %b %Y").to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            None => lines.push(Line::styled(
                "awaiting dispatch record",
                Style::default().fg(Color::DarkGray),
            )),
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "<< press left for home",
            Style::default().fg(Color::DarkGray),
        ));

        let confirmation = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(confirmation, cx.area);
    }

    fn button_config(&self) -> ButtonConfig {
        ButtonConfig::new().bind(Button::Left, ButtonAction::go_to(app::HOME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use wristview::AppContext;

    fn test_cx() -> ViewContext {
        ViewContext::new(AppContext::detached(), Rect::new(0, 0, 28, 28))
    }

    #[test]
    fn mounting_records_the_dispatch() {
        let beacon = Entity::new(BeaconState::default());
        let mut screen = EmergencyConfirmationScreen::new(beacon.clone());
        let mut cx = test_cx();

        screen.prepare(&mut cx).unwrap();
        screen.on_mount(&mut cx);

        let dispatch = beacon.read(|state| state.last.clone()).unwrap().unwrap();
        assert_eq!(dispatch.fix, location::current_fix().unwrap());
    }

    #[test]
    fn only_left_is_bound_after_dispatch() {
        let screen = EmergencyConfirmationScreen::new(Entity::new(BeaconState::default()));
        let config = screen.button_config();

        assert_eq!(config.action(Button::Left), Some(&ButtonAction::go_to("/")));
        assert_eq!(config.action(Button::Screen), None);
    }
}
