//! Xero Profit and Loss report handling.
//!
//! Deserializes Xero's nested report JSON into a typed schema, flattens
//! section rows, and extracts chronological monthly actuals for a given
//! ledger account.

pub mod flatten;
pub mod parse;
pub mod series;
pub mod types;


pub use flatten::flatten_rows;
pub use parse::{parse_money, period_end_from_label};
pub use series::{monthly_actuals, MonthlyActual};
pub use types::{Cell, CellAttribute, Report, ReportResponse, ReportRow};
