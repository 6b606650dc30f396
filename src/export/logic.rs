// src/export/logic.rs

use crate::calendar::binner::{events_in_range, sorted};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::CalendarEvent;
use crate::ui::messages::warning;
use crate::utils::date::{month_name, parse_period};
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the events whose start day falls in `range`.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY:YYYY`, `YYYY-MM:YYYY-MM`,
    ///   `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported events; nothing is written when the
    /// selection is empty.
    pub fn export(
        events: &[CalendarEvent],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let selected: Vec<CalendarEvent> = match bounds {
            Some((from, to)) => events_in_range(events, from, to),
            None => sorted(events),
        }
        .into_iter()
        .cloned()
        .collect();

        if selected.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let rows: Vec<EventExport> = selected.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&selected, path, &build_pdf_title(range))?,
        }

        Ok(selected.len())
    }
}

/// PDF title for the selected period.
pub(crate) fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_deref().map(str::trim) else {
        return "School calendar events".to_string();
    };

    if p.eq_ignore_ascii_case("all") {
        return "School calendar events".to_string();
    }

    if let Some((from, to)) = p.split_once(':') {
        return format!("Events from {} to {}", from, to);
    }

    match p.len() {
        // YYYY
        4 => format!("Events for year {}", p),
        // YYYY-MM
        7 => match p.split_once('-').and_then(|(y, m)| Some((y, m.parse::<u32>().ok()?))) {
            Some((year, month)) => format!("Events for {} {}", month_name(month), year),
            None => format!("Events for {}", p),
        },
        // YYYY-MM-DD
        10 => format!("Events on {}", p),
        _ => "School calendar events".to_string(),
    }
}
