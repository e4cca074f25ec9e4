use crate::scalar::{Scalar, ScalarKind};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Which half of a [`Money`](crate::Money) failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyField {
    Currency,
    Amount,
}

impl fmt::Display for MoneyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyField::Currency => f.write_str("a Currency"),
            MoneyField::Amount => f.write_str("an Amount"),
        }
    }
}

/// Root cause of a [`CodecError`], independent of composite context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedScalarType,
    InvalidAmountFormat,
    UnknownCurrency,
    MalformedMoneyScalar,
}

#[derive(Debug, Error)]
pub enum CodecError {
    /// The scalar's runtime kind has no mapping for the target type.
    #[error("{kind} {raw} is not a supported type for {target}{}", hint_suffix(.hint))]
    UnsupportedScalarType {
        target: &'static str,
        kind: ScalarKind,
        raw: String,
        hint: Option<&'static str>,
    },

    #[error("failed to parse {raw:?} as int: {source}")]
    InvalidAmountFormat {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// The registry returned nothing for this code.
    #[error("currency code {code:?} is not in the registry")]
    UnknownCurrency { code: String },

    #[error("{raw} is not valid to scan into Money")]
    MalformedMoneyScalar { raw: String },

    #[error("scanning {fragment} into {field}: {source}")]
    Field {
        field: MoneyField,
        fragment: String,
        #[source]
        source: Box<CodecError>,
    },
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    match hint {
        Some(h) => format!(" ({})", h),
        None => String::new(),
    }
}

impl CodecError {
    pub(crate) fn unsupported(target: &'static str, scalar: &Scalar) -> Self {
        CodecError::UnsupportedScalarType {
            target,
            kind: scalar.kind(),
            raw: scalar.to_string(),
            hint: None,
        }
    }

    pub(crate) fn field(field: MoneyField, fragment: impl Into<String>, source: CodecError) -> Self {
        CodecError::Field {
            field,
            fragment: fragment.into(),
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::UnsupportedScalarType { .. } => ErrorKind::UnsupportedScalarType,
            CodecError::InvalidAmountFormat { .. } => ErrorKind::InvalidAmountFormat,
            CodecError::UnknownCurrency { .. } => ErrorKind::UnknownCurrency,
            CodecError::MalformedMoneyScalar { .. } => ErrorKind::MalformedMoneyScalar,
            CodecError::Field { source, .. } => source.kind(),
        }
    }

    /// The money field that failed, if this error came from a composite decode.
    pub fn failed_field(&self) -> Option<MoneyField> {
        match self {
            CodecError::Field { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_looks_through_field() {
        let err = CodecError::field(
            MoneyField::Currency,
            "\"XXX\"",
            CodecError::UnknownCurrency {
                code: "XXX".to_string(),
            },
        );
        assert_eq!(err.kind(), ErrorKind::UnknownCurrency);
        assert_eq!(err.failed_field(), Some(MoneyField::Currency));
        assert_eq!(
            err.to_string(),
            "scanning \"XXX\" into a Currency: currency code \"XXX\" is not in the registry"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = CodecError::unsupported("an Amount", &Scalar::F64(12.75));
        assert_eq!(
            err.to_string(),
            "float64 12.75 is not a supported type for an Amount"
        );
        assert_eq!(err.failed_field(), None);

        let err = CodecError::unsupported("Money", &Scalar::Bytes(vec![0; 4]));
        assert_eq!(err.to_string(), "bytes <4 bytes> is not a supported type for Money");

        let err = CodecError::UnsupportedScalarType {
            target: "a Currency",
            kind: ScalarKind::I64,
            raw: "840".to_string(),
            hint: Some("store the currency code as a string"),
        };
        assert_eq!(
            err.to_string(),
            "int64 840 is not a supported type for a Currency (store the currency code as a string)"
        );
    }
}
