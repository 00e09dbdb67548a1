use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table};

use super::{panel, render_loading};
use crate::core::types::ProductPoint;
use crate::tui::component::Component;
use crate::tui::format::{format_change, format_currency, format_number};
use crate::tui::palette::Palette;

/// "Top Products": name, units sold, revenue and growth per product.
pub struct ProductTable<'a> {
    pub data: &'a [ProductPoint],
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl Component for ProductTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Top Products", &self.palette);
        if self.loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }

        let header = Row::new(["PRODUCT", "SALES", "REVENUE", "GROWTH"])
            .style(self.palette.base().add_modifier(Modifier::BOLD));

        let rows = self.data.iter().map(|product| {
            Row::new([
                Cell::from(product.name.clone()),
                Cell::from(format_number(product.sales)),
                Cell::from(format_currency(product.revenue)),
                Cell::from(Span::styled(
                    format_change(product.growth),
                    self.palette.trend(product.growth),
                )),
            ])
        });

        let widths = [
            Constraint::Min(18),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .style(self.palette.base())
            .column_spacing(2)
            .block(block);
        frame.render_widget(table, area);
    }
}
