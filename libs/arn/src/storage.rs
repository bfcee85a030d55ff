//! Storage adapter for `ResourceName`.
//!
//! Databases store an ARN as its formatted string. [`StorableValue`] models
//! the driver-level value a column may hold; [`ResourceName::scan`] accepts
//! text, bytes and null and rejects everything else.
//!
//! Scanning converts into a fresh value first and only then assigns, so a
//! failed scan never leaves the target half-written.

use crate::{parse, ResourceName, ScanError};

/// A driver-level value as read from or written to a database column.
#[derive(Debug, Clone, PartialEq)]
pub enum StorableValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
}

impl StorableValue {
    /// Name of the value's kind, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            StorableValue::Null => "null",
            StorableValue::Bool(_) => "bool",
            StorableValue::Int(_) => "int64",
            StorableValue::Float(_) => "float64",
            StorableValue::Bytes(_) => "bytes",
            StorableValue::Text(_) => "string",
        }
    }

    /// Returns true if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, StorableValue::Null)
    }
}

impl From<bool> for StorableValue {
    fn from(value: bool) -> Self {
        StorableValue::Bool(value)
    }
}

impl From<i64> for StorableValue {
    fn from(value: i64) -> Self {
        StorableValue::Int(value)
    }
}

impl From<f64> for StorableValue {
    fn from(value: f64) -> Self {
        StorableValue::Float(value)
    }
}

impl From<Vec<u8>> for StorableValue {
    fn from(value: Vec<u8>) -> Self {
        StorableValue::Bytes(value)
    }
}

impl From<&[u8]> for StorableValue {
    fn from(value: &[u8]) -> Self {
        StorableValue::Bytes(value.to_vec())
    }
}

impl From<String> for StorableValue {
    fn from(value: String) -> Self {
        StorableValue::Text(value)
    }
}

impl From<&str> for StorableValue {
    fn from(value: &str) -> Self {
        StorableValue::Text(value.to_string())
    }
}

impl<T: Into<StorableValue>> From<Option<T>> for StorableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StorableValue::Null, Into::into)
    }
}

impl From<&ResourceName> for StorableValue {
    fn from(name: &ResourceName) -> Self {
        StorableValue::Text(name.to_string())
    }
}

/// Converts an optional `ResourceName` into a storable value.
///
/// An absent name is stored as null.
pub fn to_storable_value(name: Option<&ResourceName>) -> StorableValue {
    name.map_or(StorableValue::Null, StorableValue::from)
}

impl ResourceName {
    /// Converts the name into a storable value (its formatted string).
    pub fn to_storable_value(&self) -> StorableValue {
        StorableValue::from(self)
    }

    /// Overwrites `self` with the name stored in `src`.
    ///
    /// Null is accepted and leaves `self` untouched. Text and bytes are
    /// parsed; any other kind is rejected. On error `self` is unchanged.
    pub fn scan(&mut self, src: StorableValue) -> Result<(), ScanError> {
        match src {
            StorableValue::Null => Ok(()),
            StorableValue::Text(text) => self.scan_str(&text),
            StorableValue::Bytes(bytes) => self.scan_bytes(&bytes),
            other => Err(ScanError::UnsupportedType {
                type_name: other.type_name(),
            }),
        }
    }

    /// Overwrites `self` with the name parsed from `src`.
    pub fn scan_str(&mut self, src: &str) -> Result<(), ScanError> {
        *self = parse(src)?;
        Ok(())
    }

    /// Overwrites `self` with the name parsed from UTF-8 `src`.
    pub fn scan_bytes(&mut self, src: &[u8]) -> Result<(), ScanError> {
        *self = Self::try_from(src)?;
        Ok(())
    }
}

impl TryFrom<&[u8]> for ResourceName {
    type Error = ScanError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let text = std::str::from_utf8(value)?;
        Ok(parse(text)?)
    }
}

#[cfg(feature = "sqlx")]
mod postgres {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
    use sqlx::{Decode, Encode, Postgres, Type};

    use crate::ResourceName;

    impl Type<Postgres> for ResourceName {
        fn type_info() -> PgTypeInfo {
            <String as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <String as Type<Postgres>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Postgres> for ResourceName {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <String as Encode<'q, Postgres>>::encode(self.to_string(), buf)
        }
    }

    impl<'r> Decode<'r, Postgres> for ResourceName {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            let text = <&str as Decode<'r, Postgres>>::decode(value)?;
            Ok(crate::parse(text)?)
        }
    }
}
