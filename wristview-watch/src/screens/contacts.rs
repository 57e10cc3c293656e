//! Contact list, scrolled with the top and bottom buttons.

use crate::app;
use crate::model::CONTACT_BOOK;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use wristview::{Button, ButtonAction, ButtonConfig, ScrollDirection, View, ViewContext};

pub struct ContactsScreen {
    selected: usize,
}

impl ContactsScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for ContactsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ContactsScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let items: Vec<ListItem> = CONTACT_BOOK
            .iter()
            .enumerate()
            .map(|(i, contact)| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "> " } else { "  " };
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(contact.name, style),
                    Span::raw("  "),
                    Span::styled(contact.number, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Contacts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[0]);

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
            ScrollDirection::Up => self.selected = self.selected.saturating_sub(1),
            ScrollDirection::Down => {
                self.selected = (self.selected + 1).min(CONTACT_BOOK.len().saturating_sub(1));
            }
        }
    }
}
