use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::hook::DashboardView;
use crate::tui::component::Component;
use crate::tui::components::{
    Header, KpiCards, NavTabs, ProductChart, ProductTable, Profile, RegionChart, SalesChart,
    SalesTable,
};
use crate::tui::palette::Palette;
use crate::tui::{Page, TuiState};

const FOOTER_HINT: &str = " Tab/1-4 pages · t theme · r refresh · q quit";

pub fn draw_ui(
    frame: &mut Frame,
    view: &DashboardView,
    is_dark: bool,
    tui: &TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(is_dark);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [header_area, nav_area, body_area, footer_area] = layout.areas(frame.area());

    Header {
        page: tui.page,
        user: view.user.as_ref(),
        user_loading: view.user_loading,
        is_dark,
        palette,
        spinner_frame,
    }
    .render(frame, header_area);

    NavTabs {
        page: tui.page,
        palette,
    }
    .render(frame, nav_area);

    match (tui.page, view.first_error()) {
        // Settings stays usable so the theme can still be switched
        (Page::Settings, _) => Profile {
            user: view.user.as_ref(),
            user_loading: view.user_loading,
            is_dark,
            palette,
            spinner_frame,
        }
        .render(frame, body_area),
        (_, Some(error)) => draw_error_view(frame, body_area, error, &palette),
        (Page::Dashboard, None) => draw_dashboard(frame, body_area, view, &palette, spinner_frame),
        (Page::Sales, None) => draw_sales(frame, body_area, view, &palette, spinner_frame),
        (Page::Products, None) => draw_products(frame, body_area, view, &palette, spinner_frame),
    }

    frame.render_widget(
        Paragraph::new(FOOTER_HINT).style(palette.muted()),
        footer_area,
    );
}

fn draw_error_view(frame: &mut Frame, area: Rect, error: &str, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Error Loading Dashboard",
            palette.trend(-1.0).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(error.to_string(), palette.base())),
        Line::default(),
        Line::from(Span::styled("Press r to try again", palette.muted())),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().border_style(palette.border()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    palette: &Palette,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min, Percentage};

    let [kpi_area, charts_area, table_area] =
        Layout::vertical([Length(4), Min(8), Length(9)]).areas(area);
    let [sales_area, region_area] =
        Layout::horizontal([Percentage(60), Percentage(40)]).areas(charts_area);

    KpiCards {
        kpis: &view.kpis,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, kpi_area);

    SalesChart {
        data: &view.sales_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, sales_area);

    RegionChart {
        data: &view.region_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, region_area);

    ProductTable {
        data: &view.product_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, table_area);
}

fn draw_sales(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    palette: &Palette,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};

    let [table_area, chart_area] = Layout::horizontal([Length(47), Min(0)]).areas(area);

    SalesTable {
        data: &view.sales_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, table_area);

    SalesChart {
        data: &view.sales_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, chart_area);
}

fn draw_products(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    palette: &Palette,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};

    let [table_area, chart_area] = Layout::vertical([Length(9), Min(0)]).areas(area);

    ProductTable {
        data: &view.product_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, table_area);

    ProductChart {
        data: &view.product_data,
        loading: view.loading,
        palette: *palette,
        spinner_frame,
    }
    .render(frame, chart_area);
}
