//! Command implementations: fetch, audit, list.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use route_model::{AuditReport, RouteRecord};
use route_report::write_report_json;
use route_source::{RouteClient, SourceConfig};
use route_validate::audit_routes;

use crate::cli::AuditArgs;

/// Fetch every route, validate, and aggregate. Rendering the report is the
/// caller's concern.
pub fn run_audit(args: &AuditArgs) -> Result<AuditReport> {
    let routes = fetch_routes()?;
    let report = audit_routes(&routes);
    tracing::info!(
        total = report.total_routes,
        critical = report.critical_count(),
        warnings = report.warning_count(),
        info = report.info_count(),
        clean = report.clean_count(),
        "audit finished"
    );
    if let Some(path) = &args.json {
        let written = write_report_json(path, &report)?;
        tracing::info!("wrote structured report to {}", written.display());
    }
    Ok(report)
}

/// Print a table overview of the stored routes.
pub fn run_list() -> Result<()> {
    let routes = fetch_routes()?;
    println!("{}", routes_table(&routes));
    println!("{} route(s)", routes.len());
    Ok(())
}

fn fetch_routes() -> Result<Vec<RouteRecord>> {
    let config = SourceConfig::from_env()?;
    let client = RouteClient::new(config)?;
    Ok(client.fetch_all()?)
}

fn routes_table(routes: &[RouteRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Distance (m)"),
        header_cell("Duration (min)"),
        header_cell("Area"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for route in routes {
        table.add_row(vec![
            Cell::new(route.id()),
            Cell::new(route.display_name()),
            number_cell(route.distance_meters),
            number_cell(route.estimated_minutes),
            text_cell(route.area_id.as_deref()),
        ]);
    }
    table
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.trim().is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
