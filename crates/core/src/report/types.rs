//! Typed schema for Xero report responses.
//!
//! Xero returns reports as a nested JSON structure of rows, where a row is
//! either a leaf (with cells) or a section containing nested rows. The row
//! kind is tagged by the `RowType` field on the wire.

use serde::{Deserialize, Serialize};

/// Top-level response envelope from the Xero Reports endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Reports in the response; Profit and Loss responses carry exactly one.
    #[serde(rename = "Reports", default)]
    pub reports: Vec<Report>,
}

/// A single Xero report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier (e.g. "ProfitAndLoss").
    #[serde(rename = "ReportID", default)]
    pub report_id: Option<String>,
    /// Human-readable report name.
    #[serde(rename = "ReportName", default)]
    pub report_name: Option<String>,
    /// Report type tag.
    #[serde(rename = "ReportType", default)]
    pub report_type: Option<String>,
    /// Title lines (report name, organisation, period description).
    #[serde(rename = "ReportTitles", default)]
    pub report_titles: Vec<String>,
    /// Report date as Xero renders it.
    #[serde(rename = "ReportDate", default)]
    pub report_date: Option<String>,
    /// Last update timestamp in Xero's wire format.
    #[serde(rename = "UpdatedDateUTC", default)]
    pub updated_date_utc: Option<String>,
    /// Top-level rows; absent means an empty report.
    #[serde(rename = "Rows", default)]
    pub rows: Vec<ReportRow>,
}

/// A report row, tagged by `RowType` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "RowType")]
pub enum ReportRow {
    /// Column header row; cells after the first carry the month labels.
    Header {
        /// Header cells.
        #[serde(rename = "Cells", default)]
        cells: Vec<Cell>,
    },
    /// A section grouping nested rows (e.g. "Income", "Less Operating Expenses").
    Section {
        /// Section title; may be empty on the wire.
        #[serde(rename = "Title", default)]
        title: Option<String>,
        /// Nested rows; absent tolerated as empty.
        #[serde(rename = "Rows", default)]
        rows: Vec<ReportRow>,
    },
    /// A leaf account row.
    Row {
        /// Row cells; the first is the account label.
        #[serde(rename = "Cells", default)]
        cells: Vec<Cell>,
    },
    /// A section summary row (e.g. "Total Income").
    SummaryRow {
        /// Summary cells.
        #[serde(rename = "Cells", default)]
        cells: Vec<Cell>,
    },
}

impl ReportRow {
    /// Returns the row's cells, empty for sections.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::Header { cells } | Self::Row { cells } | Self::SummaryRow { cells } => cells,
            Self::Section { .. } => &[],
        }
    }
}

/// A single report cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Rendered cell value; absent for blank cells.
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
    /// Cell attributes (account IDs and similar metadata).
    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<CellAttribute>,
}

impl Cell {
    /// Looks up an attribute value by attribute ID.
    #[must_use]
    pub fn attribute(&self, id: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.value.as_str())
    }
}

/// An attribute pair attached to a cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellAttribute {
    /// Attribute identifier (e.g. "account").
    #[serde(rename = "Id")]
    pub id: String,
    /// Attribute value.
    #[serde(rename = "Value")]
    pub value: String,
}
