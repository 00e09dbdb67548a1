use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Row, Table};

use super::{panel, render_loading};
use crate::core::types::SalesPoint;
use crate::tui::component::Component;
use crate::tui::format::{format_currency, format_number};
use crate::tui::palette::Palette;

/// Month-by-month revenue, orders and customers with a totals row.
pub struct SalesTable<'a> {
    pub data: &'a [SalesPoint],
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

/// (revenue, orders, customers) summed over all months.
fn totals(data: &[SalesPoint]) -> (u64, u64, u64) {
    data.iter().fold((0, 0, 0), |(revenue, orders, customers), point| {
        (
            revenue + point.revenue,
            orders + point.orders,
            customers + point.customers,
        )
    })
}

impl Component for SalesTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Monthly Sales", &self.palette);
        if self.loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }

        let bold = self.palette.base().add_modifier(Modifier::BOLD);
        let header = Row::new(["MONTH", "REVENUE", "ORDERS", "CUSTOMERS"]).style(bold);

        let mut rows: Vec<Row> = self
            .data
            .iter()
            .map(|point| {
                Row::new([
                    point.month.clone(),
                    format_currency(point.revenue),
                    format_number(point.orders),
                    format_number(point.customers),
                ])
            })
            .collect();

        if !self.data.is_empty() {
            let (revenue, orders, customers) = totals(self.data);
            rows.push(
                Row::new([
                    "Total".to_string(),
                    format_currency(revenue),
                    format_number(orders),
                    format_number(customers),
                ])
                .style(bold),
            );
        }

        let widths = [
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .style(self.palette.base())
            .column_spacing(2)
            .block(block);
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures;
    use crate::tui::components::test_util::render_to_string;

    #[test]
    fn test_totals() {
        assert_eq!(totals(&[]), (0, 0, 0));
        let (revenue, orders, customers) = totals(&fixtures::sales_data());
        assert_eq!(revenue, 813000);
        assert_eq!(orders, 2276);
        assert_eq!(customers, 1620);
    }

    #[test]
    fn test_sales_table_rows_and_total() {
        let data = fixtures::sales_data();
        let mut table = SalesTable {
            data: &data,
            loading: false,
            palette: Palette::LIGHT,
            spinner_frame: 0,
        };
        let text = render_to_string(&mut table, 60, 16);
        assert!(text.contains("Monthly Sales"));
        assert!(text.contains("$45,000"));
        assert!(text.contains("Dec"));
        assert!(text.contains("Total"));
        assert!(text.contains("$813,000"));
    }
}
