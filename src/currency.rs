use crate::codec::FromScalar;
use crate::error::CodecError;
use crate::registry::CurrencyRegistry;
use crate::scalar::{Scalar, ToScalar};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A currency as resolved from a [`CurrencyRegistry`].
///
/// Two currencies are equal when their codes are equal; the remaining
/// metadata belongs to the registry and is carried along untouched.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    fraction: u8,
    grapheme: String,
}

impl Currency {
    /// For registry implementors. Codecs never build currencies themselves,
    /// they only hand out what a registry returned.
    pub fn new(code: impl Into<String>, fraction: u8, grapheme: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fraction,
            grapheme: grapheme.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of minor-unit digits (2 for USD, 0 for JPY).
    pub fn fraction(&self) -> u8 {
        self.fraction
    }

    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

impl FromScalar for Currency {
    const NAME: &'static str = "currency";
    const TARGET: &'static str = "a Currency";

    fn from_scalar<R>(scalar: &Scalar, registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let code = scalar
            .as_str()
            .ok_or_else(|| CodecError::UnsupportedScalarType {
                target: Self::TARGET,
                kind: scalar.kind(),
                raw: scalar.to_string(),
                hint: Some("store the currency code as a string"),
            })?;

        registry
            .get_currency(code)
            .ok_or_else(|| CodecError::UnknownCurrency {
                code: code.to_string(),
            })
    }
}

impl ToScalar for Currency {
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.code.clone())
    }
}
