use chrono::NaiveDate;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DomainError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("apartment must have at least one room")]
    NoRooms,

    #[error("room {name} has invalid area {area}")]
    InvalidRoomArea { name: String, area: f64 },

    #[error("period end {end} precedes start {start}")]
    InvertedPeriod { start: NaiveDate, end: NaiveDate },

    #[error("apartment has no identity yet")]
    NotPersisted,
}

/// Keeps the value verbatim; it only has to contain something besides whitespace.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField(field));
    }
    Ok(value.to_string())
}
