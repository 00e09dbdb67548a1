use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Tabs;

use crate::tui::Page;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Page tabs, numbered to match the `1`–`4` shortcuts.
pub struct NavTabs {
    pub page: Page,
    pub palette: Palette,
}

impl Component for NavTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| format!("{} {}", i + 1, page.title()));
        let tabs = Tabs::new(titles)
            .select(self.page.index())
            .style(self.palette.muted())
            .highlight_style(self.palette.title().add_modifier(Modifier::REVERSED))
            .divider("│");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::test_util::render_to_string;

    #[test]
    fn test_nav_lists_all_pages() {
        let mut nav = NavTabs {
            page: Page::Sales,
            palette: Palette::LIGHT,
        };
        let text = render_to_string(&mut nav, 80, 1);
        for (i, page) in Page::ALL.iter().enumerate() {
            assert!(text.contains(&format!("{} {}", i + 1, page.title())));
        }
    }
}
