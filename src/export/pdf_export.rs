// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{events_to_pdf_table, get_pdf_headers};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::CalendarEvent;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF usando PdfManager e la tabella generata.
pub(crate) fn export_pdf(events: &[CalendarEvent], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_pdf_headers();
    let rows = events_to_pdf_table(events);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
