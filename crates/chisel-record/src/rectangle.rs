use serde::Serialize;
use serde_json::Value;

use crate::codec::{FromFields, field};
use crate::error::RecordError;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Free-function form of [`Rectangle::new`].
#[must_use]
pub const fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

impl FromFields for Rectangle {
    const ARITY: usize = 2;

    fn from_fields(fields: Vec<Value>) -> Result<Self, RecordError> {
        Ok(Self::new(field(&fields, 0)?, field(&fields, 1)?))
    }
}
