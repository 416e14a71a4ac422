use thiserror::Error;

/// Failure to encode or decode a record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The text is not valid JSON, or the value could not be serialized.
    #[error("malformed record text: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is valid JSON but not an object.
    #[error("record text must be a JSON object")]
    NotAnObject,

    /// The object has a different number of fields than the constructor.
    #[error("record has {found} fields but the constructor takes {expected}")]
    ArityMismatch {
        /// Constructor arity.
        expected: usize,
        /// Fields present in the text.
        found: usize,
    },

    /// A positional field is missing or has the wrong shape.
    #[error("field {index} is not a valid {expected}")]
    FieldType {
        /// Zero-based position in encoding order.
        index: usize,
        /// Name of the type the constructor wanted.
        expected: &'static str,
    },
}
