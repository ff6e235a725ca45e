//! Date serial numbers
//!
//! Sheets store date-times as a serial number: the integer part counts days since
//! 1899-12-30 and the fractional part is the time of day as a fraction of 24 hours.
//! Conversions keep millisecond precision.

use chrono::{Duration, NaiveDate, NaiveDateTime};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Day zero of the serial number system (1899-12-30 00:00:00)
pub fn serial_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("NaiveDate literal")
}

/// Convert a serial number to a date-time
///
/// Returns `None` for non-finite serials and serials outside the calendar range.
///
/// ```
/// use sheetwrap_record::serial::serial_to_datetime;
///
/// let dt = serial_to_datetime(45292.75).unwrap();
/// assert_eq!(dt.to_string(), "2024-01-01 18:00:00");
/// ```
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let millis = (serial * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }

    let offset = Duration::try_milliseconds(millis as i64)?;
    serial_epoch().checked_add_signed(offset)
}

/// Convert a date-time to a serial number
pub fn datetime_to_serial(datetime: &NaiveDateTime) -> f64 {
    let millis = datetime
        .signed_duration_since(serial_epoch())
        .num_milliseconds();
    millis as f64 / MILLIS_PER_DAY
}
