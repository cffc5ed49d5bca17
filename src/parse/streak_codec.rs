use chrono::NaiveDate;

use super::CodecError;

/// Date format of the streak file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the streak file: one `YYYY-MM-DD` date per line, oldest first.
///
/// Days must never go backwards; an out-of-order file is rejected rather
/// than reordered.
pub fn parse_streak(source: &str) -> Result<Vec<NaiveDate>, CodecError> {
    let mut days: Vec<NaiveDate> = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let date = NaiveDate::parse_from_str(line.trim(), DATE_FORMAT).map_err(|e| {
            CodecError::Date {
                line: i + 1,
                value: line.to_string(),
                source: e,
            }
        })?;
        if let Some(&previous) = days.last()
            && date < previous
        {
            return Err(CodecError::OutOfOrder {
                line: i + 1,
                previous,
                date,
            });
        }
        days.push(date);
    }
    Ok(days)
}

/// Serialize streak days one per line, each newline-terminated.
pub fn serialize_streak(days: &[NaiveDate]) -> String {
    let mut out = String::new();
    for day in days {
        out.push_str(&day.format(DATE_FORMAT).to_string());
        out.push('\n');
    }
    out
}
