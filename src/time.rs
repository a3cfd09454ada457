// RFC 3339 timestamps -> absolute nanoseconds since the Unix epoch

use chrono::DateTime;

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid timestamp {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("timestamp {input:?} does not fit in i64 nanoseconds")]
    OutOfRange { input: String },
}

/// Parse an RFC 3339 timestamp (e.g. "2024-01-01T00:00:00.123456789Z") into
/// `epoch_seconds * 1_000_000_000 + subsec_nanos`.
pub fn to_epoch_nanos(timestamp: &str) -> Result<i64, TimeParseError> {
    let parsed =
        DateTime::parse_from_rfc3339(timestamp).map_err(|source| TimeParseError::Invalid {
            input: timestamp.to_string(),
            source,
        })?;
    parsed
        .timestamp()
        .checked_mul(1_000_000_000)
        .and_then(|ns| ns.checked_add(i64::from(parsed.timestamp_subsec_nanos())))
        .ok_or_else(|| TimeParseError::OutOfRange {
            input: timestamp.to_string(),
        })
}
