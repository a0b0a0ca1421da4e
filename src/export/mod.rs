//! Spreadsheet export of the display projection.

/// `.xlsx` writer.
pub mod xlsx;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header labels written as the first row of every export.
pub const HEADERS: [&str; 2] = ["Item Name", "Quantity"];

/// Errors raised while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook construction or save failed.
    #[error("{0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    /// Filesystem failure before the workbook is written.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Layout of the exported worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Worksheet name.
    pub sheet_name: String,
    /// Display width of the name column.
    pub name_column_width: f64,
    /// Display width of the quantity column.
    pub quantity_column_width: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Inventory".to_string(),
            name_column_width: 17.0,
            quantity_column_width: 10.0,
        }
    }
}
