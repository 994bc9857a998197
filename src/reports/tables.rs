use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyfit::analyzer::{AggregateReport, LayoutReport, NormalizedScores};
use keyfit::config::{ReportParams, SortKey};
use keyfit::registry::LayoutRegistry;

fn metric(n: &NormalizedScores, key: SortKey) -> f32 {
    match key {
        SortKey::Hand => n.same_hand,
        SortKey::Finger => n.same_finger,
        SortKey::Distance => n.distance,
    }
}

/// Registry order, or ascending by the chosen metric (stable on ties).
pub fn ordered<'a>(report: &'a AggregateReport, sort_by: Option<SortKey>) -> Vec<&'a LayoutReport> {
    let mut rows: Vec<&LayoutReport> = report.entries.iter().collect();
    if let Some(key) = sort_by {
        rows.sort_by(|a, b| metric(&a.normalized, key).total_cmp(&metric(&b.normalized, key)));
    }
    rows
}

/// Lowest normalized value for `key`; the first layout wins ties.
pub fn best(report: &AggregateReport, key: SortKey) -> Option<&LayoutReport> {
    let mut best: Option<&LayoutReport> = None;
    for e in &report.entries {
        if best.map_or(true, |b| metric(&e.normalized, key) < metric(&b.normalized, key)) {
            best = Some(e);
        }
    }
    best
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn summary(report: &AggregateReport, params: &ReportParams) -> Table {
    let p = params.precision;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Typed"),
        Cell::new("Hand"),
        Cell::new("Hand %").fg(Color::Cyan),
        Cell::new("Finger"),
        Cell::new("Finger %").fg(Color::Red),
        Cell::new("Dist"),
        Cell::new("Dist %").fg(Color::Yellow),
    ]);

    for e in ordered(report, params.sort_by) {
        let (r, n) = (&e.raw, &e.normalized);
        table.add_row(vec![
            Cell::new(&e.layout_name).add_attribute(Attribute::Bold),
            Cell::new(r.typed_count),
            Cell::new(r.same_hand_count),
            Cell::new(format!("{:.*}", p, n.same_hand)).fg(Color::Cyan),
            Cell::new(r.same_finger_count),
            Cell::new(format!("{:.*}", p, n.same_finger)).fg(Color::Red),
            Cell::new(format!("{:.0}", r.distance_travelled)),
            Cell::new(format!("{:.*}", p, n.distance)).fg(Color::Yellow),
        ]);
    }

    right_align(&mut table, 1..=7);
    table
}

/// Per-metric delta of every layout against the best one.
pub fn comparison(report: &AggregateReport, params: &ReportParams) -> Table {
    let p = params.precision;
    let keys = [SortKey::Hand, SortKey::Finger, SortKey::Distance];
    let bests: Vec<Option<&LayoutReport>> = keys.iter().map(|&k| best(report, k)).collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Comparison vs Best").add_attribute(Attribute::Bold)];
    for (key, b) in keys.iter().zip(&bests) {
        let label = match key {
            SortKey::Hand => "Hand",
            SortKey::Finger => "Finger",
            SortKey::Distance => "Dist",
        };
        let who = b.map(|b| b.layout_name.as_str()).unwrap_or("-");
        header.push(Cell::new(format!("Δ {} ({})", label, who)));
    }
    table.set_header(header);

    for e in ordered(report, params.sort_by) {
        let mut row = vec![Cell::new(&e.layout_name).add_attribute(Attribute::Bold)];
        for (&key, b) in keys.iter().zip(&bests) {
            let base = b.map(|b| metric(&b.normalized, key)).unwrap_or(0.0);
            let delta = metric(&e.normalized, key) - base;
            let cell = Cell::new(format!("{:+.*}", p, delta));
            row.push(if delta == 0.0 { cell.fg(Color::Green) } else { cell });
        }
        table.add_row(row);
    }

    right_align(&mut table, 1..=3);
    table
}

pub fn layouts(registry: &LayoutRegistry) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Home"),
        Cell::new("Enabled"),
    ]);

    for l in registry.layouts() {
        let home = l.profiles().filter(|(_, p)| p.distance == 0.0).count();
        let enabled = if l.enabled {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(l.name()).add_attribute(Attribute::Bold),
            Cell::new(l.key_count()),
            Cell::new(home),
            enabled,
        ]);
    }

    right_align(&mut table, 1..=2);
    table
}
