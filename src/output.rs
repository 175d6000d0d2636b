//! Output formatting and persistence for launch reports.
//!
//! Supports an aligned text table, CSV, JSON and appending to a CSV history file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::pipeline::class::LaunchClass;
use crate::pipeline::types::{CountrySpend, LaunchReport};
use csv::WriterBuilder;

const HEADERS: [&str; 3] = ["Launch Class", "Average Price", "Country"];

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &LaunchReport) {
    debug!("{:#?}", report);
}

/// Renders the report rows as an aligned text table.
pub fn render_table(report: &LaunchReport) -> String {
    let cells: Vec<[String; 3]> = report
        .rows
        .iter()
        .map(|row| {
            [
                row.launch_class.to_string(),
                format!("{:.2}", row.average_price),
                row.country.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = format!(
        "{:<w0$}  {:>w1$}  {:<w2$}\n",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    for [class, price, country] in &cells {
        out.push_str(&format!(
            "{:<w0$}  {:>w1$}  {:<w2$}\n",
            class,
            price,
            country,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
    }
    out
}

/// Writes the report rows as CSV with a header line.
pub fn write_csv<W: Write>(writer: W, report: &LaunchReport) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &LaunchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the per-country spend table.
pub fn render_spend(spend: &[CountrySpend]) -> String {
    let width = spend
        .iter()
        .map(|s| s.country.len())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    let mut out = format!(
        "{:<width$}  {:>18}  {:>8}  Eligible\n",
        "Country", "Launch Cost", "Launches"
    );
    for s in spend {
        out.push_str(&format!(
            "{:<width$}  {:>18.2}  {:>8}  {}\n",
            s.country,
            s.total_launch_cost,
            s.launches,
            if s.eligible { "yes" } else { "no" }
        ));
    }
    out
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    run_at: DateTime<Utc>,
    launch_class: LaunchClass,
    average_price: f64,
    country: &'a str,
}

/// Appends the report rows to a CSV history file, tagged with the report's
/// generation time.
///
/// Creates the file with headers if it does not already exist.
pub fn append_history(path: &Path, report: &LaunchReport) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending report history");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // header only on first write
        .from_writer(file);

    for row in &report.rows {
        writer.serialize(HistoryRow {
            run_at: report.generated_at,
            launch_class: row.launch_class,
            average_price: row.average_price,
            country: &row.country,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::ResultRow;
    use std::fs;

    fn sample_report() -> LaunchReport {
        LaunchReport {
            generated_at: Utc::now(),
            rows: [
                ResultRow {
                    launch_class: LaunchClass::Light,
                    average_price: 100.0,
                    country: "Usa".to_string(),
                },
                ResultRow {
                    launch_class: LaunchClass::Medium,
                    average_price: 42.5,
                    country: "New Zealand".to_string(),
                },
                ResultRow {
                    launch_class: LaunchClass::Heavy,
                    average_price: 7.25,
                    country: "India".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_report());
    }

    #[test]
    fn test_render_table_rows() {
        let table = render_table(&sample_report());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Launch Class"));
        assert!(lines[1].starts_with("Light"));
        assert!(lines[2].contains("42.50"));
        assert!(lines[2].ends_with("New Zealand"));
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_report()).unwrap();
        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines[0], "Launch Class,Average Price,Country");
        assert_eq!(lines[1], "Light,100.0,Usa");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_to_json_uses_display_columns() {
        let json = to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rows"][1]["Country"], "New Zealand");
        assert_eq!(value["rows"][2]["Launch Class"], "Heavy");
    }

    #[test]
    fn test_render_spend() {
        let spend = vec![CountrySpend {
            country: "japan".to_string(),
            total_launch_cost: 12_000_000.0,
            launches: 3,
            eligible: true,
        }];
        let table = render_spend(&spend);
        assert!(table.lines().nth(1).unwrap().starts_with("japan"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_append_history_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        append_history(&path, &sample_report()).unwrap();
        append_history(&path, &sample_report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("run_at")).count();
        assert_eq!(header_count, 1);
        // 1 header + 2 runs of 3 rows
        assert_eq!(content.lines().count(), 7);
    }
}
