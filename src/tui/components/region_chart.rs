use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{panel, render_loading};
use crate::core::types::RegionPoint;
use crate::tui::component::Component;
use crate::tui::format::format_percent;
use crate::tui::palette::Palette;

const LABEL_WIDTH: usize = 14;
const PERCENT_WIDTH: usize = 5;

/// Share of sales per region, one proportional bar per line.
///
/// ```text
/// North America ██████████████░░░░░░░░░░░░░░░░  45%
/// Europe        █████████░░░░░░░░░░░░░░░░░░░░░  28%
/// ```
pub struct RegionChart<'a> {
    pub data: &'a [RegionPoint],
    pub loading: bool,
    pub palette: Palette,
    pub spinner_frame: usize,
}

/// Number of filled cells for `percentage` of `width`, clamped to the bar.
fn filled_cells(percentage: f64, width: usize) -> usize {
    let filled = (percentage.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
    filled.min(width)
}

impl Component for RegionChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel("Sales by Region", &self.palette);
        if self.loading {
            render_loading(frame, area, block, &self.palette, self.spinner_frame);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let bar_width = inner_width.saturating_sub(LABEL_WIDTH + PERCENT_WIDTH + 2);

        let lines: Vec<Line> = self
            .data
            .iter()
            .map(|region| {
                let filled = filled_cells(region.percentage, bar_width);
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$.width$} ", region.region, width = LABEL_WIDTH),
                        self.palette.base(),
                    ),
                    Span::styled("█".repeat(filled), self.palette.title()),
                    Span::styled("░".repeat(bar_width - filled), self.palette.border()),
                    Span::styled(
                        format!(" {:>width$}", format_percent(region.percentage), width = PERCENT_WIDTH),
                        self.palette.base(),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
