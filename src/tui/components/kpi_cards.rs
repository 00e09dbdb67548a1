//! # KPI Cards Component
//!
//! Four cards side by side: total revenue, total orders, total customers
//! and conversion rate. Revenue and orders carry their growth figure,
//! coloured by direction.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{panel, render_loading};
use crate::core::types::Kpis;
use crate::tui::component::Component;
use crate::tui::format::{format_change, format_currency, format_number, format_percent};
use crate::tui::palette::Palette;

pub struct KpiCards<'a> {
    pub kpis: &'a Kpis,
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

struct Card {
    title: &'static str,
    value: String,
    change: Option<f64>,
}

impl KpiCards<'_> {
    fn cards(&self) -> [Card; 4] {
        let kpis = self.kpis;
        [
            Card {
                title: "Total Revenue",
                value: format_currency(kpis.total_revenue),
                change: Some(kpis.revenue_growth),
            },
            Card {
                title: "Total Orders",
                value: format_number(kpis.total_orders),
                change: Some(kpis.order_growth),
            },
            Card {
                title: "Total Customers",
                value: format_number(kpis.total_customers),
                change: None,
            },
            Card {
                title: "Conversion Rate",
                value: format_percent(kpis.conversion_rate),
                change: None,
            },
        ]
    }
}

impl Component for KpiCards<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);

        for (card, card_area) in self.cards().into_iter().zip(areas) {
            let block = panel(card.title, &self.palette);
            if self.loading {
                render_loading(frame, card_area, block, &self.palette, self.spinner_frame);
                continue;
            }

            let mut lines = vec![Line::from(Span::styled(
                card.value,
                self.palette.base().add_modifier(Modifier::BOLD),
            ))];
            if let Some(change) = card.change {
                lines.push(Line::from(vec![
                    Span::styled(format_change(change), self.palette.trend(change)),
                    Span::styled(" from last month", self.palette.muted()),
                ]));
            }
            frame.render_widget(Paragraph::new(lines).block(block), card_area);
        }
    }
}
