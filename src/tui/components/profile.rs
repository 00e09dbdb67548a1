//! # Profile Component
//!
//! The settings page: who is signed in and which theme is active, plus the
//! key bindings. Theme changes go through the store, so this component
//! only displays the current value.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{panel, render_loading};
use crate::core::types::User;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct Profile<'a> {
    pub user: Option<&'a User>,
    pub user_loading: bool,
    pub is_dark: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl Profile<'_> {
    fn field(&self, label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), self.palette.muted()),
            Span::styled(value, self.palette.base()),
        ])
    }
}

impl Component for Profile<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Settings", &self.palette);
        if self.user.is_none() && self.user_loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }

        let mut lines = Vec::new();
        match self.user {
            Some(user) => {
                lines.push(Line::from(Span::styled(
                    format!("[{}] {}", user.initials(), user.name),
                    self.palette.base().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
                lines.push(self.field("Email", user.email.clone()));
                lines.push(self.field("Role", user.role.clone()));
                lines.push(self.field("Department", user.department.clone()));
                lines.push(self.field(
                    "Joined",
                    user.join_date.format("%B %-d, %Y").to_string(),
                ));
            }
            None => lines.push(Line::from(Span::styled(
                "No user profile loaded",
                self.palette.muted(),
            ))),
        }

        lines.push(Line::default());
        let theme = if self.is_dark { "Dark" } else { "Light" };
        lines.push(self.field("Theme", format!("{theme} (press t to switch)")));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Tab/1-4 pages · t theme · r refresh · q quit",
            self.palette.muted(),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures;
    use crate::tui::components::test_util::render_to_string;

    #[test]
    fn test_profile_shows_user_details() {
        let user = fixtures::user();
        let mut profile = Profile {
            user: Some(&user),
            user_loading: false,
            is_dark: true,
            palette: Palette::DARK,
            spinner_frame: 0,
        };
        let text = render_to_string(&mut profile, 70, 14);
        assert!(text.contains("[SJ] Sarah Johnson"));
        assert!(text.contains("sarah.johnson@company.com"));
        assert!(text.contains("Sales & Marketing"));
        assert!(text.contains("March 15, 2022"));
        assert!(text.contains("Dark (press t to switch)"));
    }

    #[test]
    fn test_profile_without_user() {
        let mut profile = Profile {
            user: None,
            user_loading: false,
            is_dark: false,
            palette: Palette::LIGHT,
            spinner_frame: 0,
        };
        let text = render_to_string(&mut profile, 70, 10);
        assert!(text.contains("No user profile loaded"));
        assert!(text.contains("Light"));
    }
}
