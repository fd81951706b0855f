//! Date helpers
//!
//! Quote dates are shown in the Brazilian day-first format (`19/10/2026`).
//! The validity date is always counted from the moment of generation, never
//! from the date carried in the quote metadata.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Days a quote stays valid after it is generated
pub const VALIDITY_DAYS: i64 = 20;

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Date the quote expires, `VALIDITY_DAYS` after `generated_at`
pub fn validity_date(generated_at: &NaiveDateTime) -> NaiveDate {
    (*generated_at + chrono::Duration::days(VALIDITY_DAYS)).date()
}

/// Format a date as `DD/MM/YYYY`
/// Example: "07/01/2026"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
