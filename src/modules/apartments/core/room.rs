use crate::modules::apartments::core::errors::{DomainError, require_non_blank};

/// Floor area of a room. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SquareMeter(f64);

impl SquareMeter {
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    size: SquareMeter,
}

impl Room {
    pub fn new(name: &str, area: f64) -> Result<Self, DomainError> {
        let name = require_non_blank("room name", name)?;
        if !area.is_finite() || area <= 0.0 {
            return Err(DomainError::InvalidRoomArea { name, area });
        }
        Ok(Self {
            name,
            size: SquareMeter(area),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> SquareMeter {
        self.size
    }
}
