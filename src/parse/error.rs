use chrono::NaiveDate;

/// A line of a storage file that could not be decoded
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("line {line}: invalid habit record: {source}")]
    Habit {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: invalid date {value:?} (expected YYYY-MM-DD): {source}")]
    Date {
        line: usize,
        value: String,
        source: chrono::ParseError,
    },
    #[error("line {line}: {date} comes before {previous}; streak days must be in order")]
    OutOfOrder {
        line: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },
    #[error("could not serialize habit: {0}")]
    Serialize(#[from] serde_json::Error),
}
