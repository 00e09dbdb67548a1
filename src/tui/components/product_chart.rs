use ratatui::Frame;
use ratatui::layout::{Direction, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup};

use super::{panel, render_loading};
use crate::core::types::ProductPoint;
use crate::tui::component::Component;
use crate::tui::format::format_currency;
use crate::tui::palette::Palette;

/// Revenue per product as horizontal bars.
pub struct ProductChart<'a> {
    pub data: &'a [ProductPoint],
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl Component for ProductChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Revenue by Product", &self.palette);
        if self.loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }

        let bars: Vec<Bar> = self
            .data
            .iter()
            .map(|product| {
                Bar::default()
                    .value(product.revenue)
                    .text_value(format_currency(product.revenue))
                    .label(Line::from(product.name.clone()))
                    .style(self.palette.trend(product.growth))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .value_style(self.palette.base())
            .label_style(self.palette.muted());
        frame.render_widget(chart, area);
    }
}
