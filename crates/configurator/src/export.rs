//! Assembly report export.
//!
//! The report lists every unit once with its position and its non-base
//! walls, plus unit count, total price and generation time. Rendering to
//! PDF or any other container format is left to the caller.

use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use shared::{total_price, AssemblyDescription, Face, FaceVariant, PriceTable, UnitId};

use crate::i18n::{face_label, t_in, variant_label};
use crate::state::{format_position, format_price, price_in_thousands, ExportSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallModification {
    pub face: Face,
    pub variant: FaceVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub id: UnitId,
    pub position: [f64; 3],
    /// Non-base walls only
    pub modifications: Vec<WallModification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub title: String,
    pub unit_count: usize,
    pub total_price: u64,
    /// Seconds since the Unix epoch
    pub generated_at: u64,
    pub units: Vec<UnitEntry>,
}

/// Current time in seconds since the Unix epoch
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Collect the report data for an assembly.
pub fn build_report(
    assembly: &AssemblyDescription,
    prices: &PriceTable,
    title: &str,
    generated_at: u64,
) -> AssemblyReport {
    let units = assembly
        .units
        .iter()
        .map(|unit| UnitEntry {
            id: unit.id,
            position: unit.position,
            modifications: assembly
                .walls
                .modifications(unit.id)
                .into_iter()
                .map(|(face, variant)| WallModification { face, variant })
                .collect(),
        })
        .collect();

    AssemblyReport {
        title: title.to_string(),
        unit_count: assembly.units.len(),
        total_price: total_price(&assembly.units, &assembly.walls, prices),
        generated_at,
        units,
    }
}

/// Plain-text rendering of a report in the configured language and currency.
pub fn render_text(report: &AssemblyReport, export: &ExportSettings) -> String {
    let lang = export.lang;
    let title = if report.title.is_empty() {
        t_in(lang, "report.title")
    } else {
        report.title.as_str()
    };
    let currency = export.currency_label();

    let mut out = String::new();
    let _ = writeln!(out, "{title}\n");
    let _ = writeln!(out, "{}: {}", t_in(lang, "report.count"), report.unit_count);
    let _ = writeln!(
        out,
        "{}: {} ({} {})",
        t_in(lang, "report.total"),
        format_price(report.total_price, currency),
        price_in_thousands(report.total_price),
        t_in(lang, "report.thousands"),
    );
    let _ = writeln!(out, "{}: {}\n", t_in(lang, "report.generated"), report.generated_at);
    let _ = writeln!(out, "{}:", t_in(lang, "report.details"));

    for entry in &report.units {
        let mods = if entry.modifications.is_empty() {
            t_in(lang, "report.no_mods").to_string()
        } else {
            entry
                .modifications
                .iter()
                .map(|m| format!("{}: {}", face_label(lang, m.face), variant_label(lang, m.variant)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(
            out,
            "{} {}: {} {}; {}",
            t_in(lang, "report.unit"),
            entry.id,
            t_in(lang, "report.position"),
            format_position(entry.position),
            mods
        );
    }
    out
}

/// JSON rendering of a report.
pub fn to_json(report: &AssemblyReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Suggested download name for a report.
pub fn report_file_name(generated_at: u64) -> String {
    format!("assembly-plan-{generated_at}.txt")
}
