//! Output formatting for CLI commands.

use std::io::{self, Write};

use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::commands::session::{EdgeRow, Report};

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Write a key-value table.
pub fn write_key_value_table(out: &mut impl Write, items: &[(&str, String)]) -> io::Result<()> {
    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    writeln!(out, "{table}")
}

fn write_edges(out: &mut impl Write, edges: &[EdgeRow]) -> io::Result<()> {
    if edges.is_empty() {
        return writeln!(out, "(no edges)");
    }
    let mut table = create_table();
    add_header(&mut table, &["Edge", "From", "To", "Weight"]);
    for edge in edges {
        table.add_row(vec![
            Cell::new(&edge.label).fg(Color::Green),
            Cell::new(&edge.from),
            Cell::new(&edge.to),
            Cell::new(edge.weight),
        ]);
    }
    writeln!(out, "{table}")
}

/// Print one command result to standard output.
pub fn print_report(report: &Report, format: Format, quiet: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format, quiet)
}

/// Write one command result.
///
/// JSON output is one compact document per line. Quiet mode drops status
/// messages but keeps query results.
pub fn write_report(
    out: &mut impl Write,
    report: &Report,
    format: Format,
    quiet: bool,
) -> anyhow::Result<()> {
    if quiet && matches!(report, Report::Status { .. }) {
        return Ok(());
    }

    if let Format::Json = format {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    match report {
        Report::Status { message } => writeln!(out, "✓ {message}")?,
        Report::Adjacency {
            first,
            second,
            adjacent,
        } => {
            let verdict = if *adjacent { "are" } else { "are not" };
            writeln!(out, "{first} and {second} {verdict} adjacent")?;
        }
        Report::Listing { lines } => {
            if lines.is_empty() && !quiet {
                writeln!(out, "(empty graph)")?;
            }
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Report::Tree {
            title,
            edges,
            total_weight,
            unreachable,
            distances,
        } => {
            writeln!(out, "{title}")?;
            write_edges(out, edges)?;
            if let Some(total) = total_weight {
                writeln!(out, "Total weight: {total}")?;
            }
            if !unreachable.is_empty() {
                writeln!(out, "Unreachable: {}", unreachable.join(", "))?;
            }
            if !distances.is_empty() {
                let items: Vec<(&str, String)> = distances
                    .iter()
                    .map(|row| {
                        let distance = row
                            .distance
                            .map_or_else(|| "∞".to_string(), |d| d.to_string());
                        (row.vertex.as_str(), distance)
                    })
                    .collect();
                write_key_value_table(out, &items)?;
            }
        }
        Report::Traversal {
            algorithm,
            origin,
            order,
            edges,
        } => {
            writeln!(out, "{algorithm} from {origin}: {}", order.join(" → "))?;
            write_edges(out, edges)?;
        }
        Report::Components {
            components,
            summary,
        } => {
            if components.is_empty() {
                writeln!(out, "(no components)")?;
            } else {
                let mut table = create_table();
                add_header(&mut table, &["#", "Vertices", "Edges"]);
                for (index, component) in components.iter().enumerate() {
                    table.add_row(vec![
                        Cell::new(index + 1),
                        Cell::new(component.vertices.join(", ")),
                        Cell::new(component.edges.join(", ")),
                    ]);
                }
                writeln!(out, "{table}")?;
            }
            if !summary.is_empty() {
                writeln!(out, "{summary}")?;
            }
        }
        Report::AdjacencyMatrix { matrix } => write!(out, "{}", matrix.to_text())?,
        Report::IncidenceMatrix { matrix } => write!(out, "{}", matrix.to_text())?,
        Report::Coloring {
            color_count,
            classes,
        } => {
            let mut table = create_table();
            add_header(&mut table, &["Colour", "Vertices"]);
            for (color, class) in classes.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(color).fg(Color::Green),
                    Cell::new(class.join(", ")),
                ]);
            }
            writeln!(out, "{table}")?;
            writeln!(out, "Colours used: {color_count}")?;
        }
    }
    Ok(())
}
