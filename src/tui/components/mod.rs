//! # TUI Components
//!
//! Stateless, props-based widgets for the dashboard pages. Each receives the
//! slice of `DashboardView` it shows plus the active `Palette`, and renders
//! a loading placeholder while its data is still being fetched.
//!
//! ```text
//! components/
//! ├── header.rs         (app title, current user, theme)
//! ├── nav.rs            (page tabs)
//! ├── kpi_cards.rs      (four headline metrics)
//! ├── sales_chart.rs    (monthly revenue bars)
//! ├── sales_table.rs    (monthly breakdown with totals)
//! ├── product_table.rs  (top products)
//! ├── product_chart.rs  (revenue per product)
//! ├── region_chart.rs   (share per region)
//! └── profile.rs        (settings page: user + theme)
//! ```

pub mod header;
pub mod kpi_cards;
pub mod nav;
pub mod product_chart;
pub mod product_table;
pub mod profile;
pub mod region_chart;
pub mod sales_chart;
pub mod sales_table;

pub use header::Header;
pub use kpi_cards::KpiCards;
pub use nav::NavTabs;
pub use product_chart::ProductChart;
pub use product_table::ProductTable;
pub use profile::Profile;
pub use region_chart::RegionChart;
pub use sales_chart::SalesChart;
pub use sales_table::SalesTable;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::format::spinner;
use crate::tui::palette::Palette;

/// A titled, bordered panel in the current palette.
pub(crate) fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::bordered()
        .title(format!(" {title} "))
        .title_style(palette.title())
        .border_style(palette.border())
}

/// Spinner line centered in `block`, shown while data is in flight.
pub(crate) fn render_loading(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    palette: &Palette,
    spinner_frame: usize,
) {
    let text = format!("{} Loading…", spinner(spinner_frame));
    let paragraph = Paragraph::new(text)
        .style(palette.muted())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
