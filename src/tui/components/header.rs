//! # Header Component
//!
//! Single top line: app name and current page on the left, the signed-in
//! user and active theme on the right.
//!
//! ```text
//!  Salesboard · Dashboard            Sarah Johnson · Sales Manager [SJ]  ☾ dark
//! ```
//!
//! The user part shows a spinner while the user fetch is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::types::User;
use crate::tui::Page;
use crate::tui::component::Component;
use crate::tui::format::spinner;
use crate::tui::palette::Palette;

pub struct Header<'a> {
    pub page: Page,
    pub user: Option<&'a User>,
    pub user_loading: bool,
    pub is_dark: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl Header<'_> {
    fn user_text(&self) -> String {
        match self.user {
            // A refresh keeps showing the known user
            Some(user) => format!("{} · {} [{}]", user.name, user.role, user.initials()),
            None if self.user_loading => format!("{} Loading profile", spinner(self.spinner_frame)),
            None => "Not signed in".to_string(),
        }
    }

    fn theme_text(&self) -> &'static str {
        if self.is_dark { "☾ dark" } else { "☀ light" }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let right = format!("{}  {} ", self.user_text(), self.theme_text());
        let right_width = right.chars().count() as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        let left = Line::from(vec![
            Span::styled(" Salesboard", self.palette.title()),
            Span::styled(" · ", self.palette.muted()),
            Span::styled(
                self.page.title(),
                self.palette.base().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(left).style(self.palette.base()), left_area);
        frame.render_widget(
            Paragraph::new(right)
                .style(self.palette.base())
                .alignment(Alignment::Right),
            right_area,
        );
    }
}
