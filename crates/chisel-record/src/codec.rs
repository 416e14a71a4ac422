use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RecordError;

/// A type that can be built from field values given in encoding order.
///
/// This is the positional counterpart of [`encode_record`]: the `n`th value
/// of the encoded object becomes the `n`th constructor argument.
pub trait FromFields: Sized {
    /// Number of constructor arguments.
    const ARITY: usize;

    /// Build a value from exactly [`Self::ARITY`] fields.
    ///
    /// # Errors
    ///
    /// [`RecordError::FieldType`] when a field cannot be converted.
    fn from_fields(fields: Vec<Value>) -> Result<Self, RecordError>;
}

/// Encode `value` as compact JSON text.
///
/// Fields appear in the order the type serializes them (declaration order
/// for derived `Serialize`). Numbers keep their Rust type, so an `f64`
/// field holding `10` is written `10.0`; [`decode_record`] accepts either
/// form.
///
/// # Errors
///
/// [`RecordError::Json`] if serialization fails, e.g. a map with non-string
/// keys.
pub fn encode_record<T: Serialize + ?Sized>(value: &T) -> Result<String, RecordError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode `text` into a `T` by position.
///
/// The object's keys are ignored; only the order of its values matters.
///
/// # Errors
///
/// - [`RecordError::Json`] for malformed text
/// - [`RecordError::NotAnObject`] for a non-object payload
/// - [`RecordError::ArityMismatch`] when the field count differs from `T::ARITY`
/// - whatever [`FromFields::from_fields`] reports
pub fn decode_record<T: FromFields>(text: &str) -> Result<T, RecordError> {
    let Value::Object(object) = serde_json::from_str::<Value>(text)? else {
        return Err(RecordError::NotAnObject);
    };

    let fields: Vec<Value> = object.into_iter().map(|(_, value)| value).collect();
    if fields.len() != T::ARITY {
        return Err(RecordError::ArityMismatch {
            expected: T::ARITY,
            found: fields.len(),
        });
    }

    T::from_fields(fields)
}

/// Convert the field at `index` for use in [`FromFields::from_fields`].
///
/// # Errors
///
/// [`RecordError::FieldType`] if the field is missing or does not
/// deserialize as `T`.
pub fn field<T: DeserializeOwned>(fields: &[Value], index: usize) -> Result<T, RecordError> {
    let mismatch = || RecordError::FieldType {
        index,
        expected: type_name::<T>(),
    };
    let value = fields.get(index).ok_or_else(mismatch)?;
    T::deserialize(value).map_err(|_| mismatch())
}
