use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::item::ProjectedRow;

use super::{ExportConfig, ExportError, HEADERS};

const EXTENSION: &str = ".xlsx";

/// Appends `.xlsx` unless `path` already ends with it (any case).
pub fn ensure_xlsx_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let text = path.as_os_str().to_string_lossy();
    if text.to_lowercase().ends_with(EXTENSION) {
        return path.to_path_buf();
    }

    let mut raw = path.as_os_str().to_os_string();
    raw.push(EXTENSION);
    PathBuf::from(raw)
}

/// Writes `rows` to a single-sheet workbook at `path` and returns the final path.
///
/// Cells hold the same text the display table shows, so quantities are
/// written as strings.
pub fn write_projection(
    rows: &[ProjectedRow],
    path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let path = ensure_xlsx_extension(path);

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.sheet_name)?;

    for (col, label) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, &header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        sheet.write_string(r, 0, &row.name)?;
        sheet.write_string(r, 1, row.quantity.to_string())?;
    }

    sheet.set_column_width(0, config.name_column_width)?;
    sheet.set_column_width(1, config.quantity_column_width)?;

    let bytes = workbook.save_to_buffer()?;
    fs::write(&path, bytes)?;
    info!(path = %path.display(), rows = rows.len(), "projection exported");
    Ok(path)
}
