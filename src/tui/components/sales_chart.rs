use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

use super::{panel, render_loading};
use crate::core::types::SalesPoint;
use crate::tui::component::Component;
use crate::tui::format::format_compact;
use crate::tui::palette::Palette;

/// Monthly revenue as vertical bars, one per month.
pub struct SalesChart<'a> {
    pub data: &'a [SalesPoint],
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl Component for SalesChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Revenue by Month", &self.palette);
        if self.loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }
        if self.data.is_empty() {
            let empty = Paragraph::new("No sales data").style(self.palette.muted());
            frame.render_widget(empty.block(block), area);
            return;
        }

        let bars: Vec<Bar> = self
            .data
            .iter()
            .map(|point| {
                Bar::default()
                    .value(point.revenue)
                    .text_value(format_compact(point.revenue))
                    .label(Line::from(point.month.clone()))
            })
            .collect();

        // Spread the bars over the inner width, keeping one column of gap
        let inner_width = area.width.saturating_sub(2);
        let slots = bars.len() as u16;
        let bar_width = (inner_width / slots.max(1)).saturating_sub(1).clamp(1, 7);

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(self.palette.title())
            .value_style(self.palette.base().add_modifier(Modifier::REVERSED))
            .label_style(self.palette.muted());
        frame.render_widget(chart, area);
    }
}
