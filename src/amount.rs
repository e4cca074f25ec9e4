use crate::codec::FromScalar;
use crate::error::CodecError;
use crate::registry::CurrencyRegistry;
use crate::scalar::{Scalar, ToScalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed count of a currency's minor units (cents for USD).
///
/// No scaling is applied anywhere in this crate: `Amount(1050)` is stored
/// as `1050`, never as `10.50`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    fn parse(raw: &str) -> Result<Self, CodecError> {
        raw.parse::<i64>()
            .map(Amount)
            .map_err(|source| CodecError::InvalidAmountFormat {
                raw: raw.to_string(),
                source,
            })
    }
}

impl From<i64> for Amount {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amounts never need a registry, so they also convert directly.
impl TryFrom<&Scalar> for Amount {
    type Error = CodecError;

    fn try_from(scalar: &Scalar) -> Result<Self, Self::Error> {
        match scalar {
            Scalar::Text(raw) => Amount::parse(raw),
            other => other
                .as_i64()
                .map(Amount)
                .ok_or_else(|| CodecError::unsupported(Self::TARGET, other)),
        }
    }
}

impl FromScalar for Amount {
    const NAME: &'static str = "amount";
    const TARGET: &'static str = "an Amount";

    fn from_scalar<R>(scalar: &Scalar, _registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        Amount::try_from(scalar)
    }
}

impl ToScalar for Amount {
    fn to_scalar(&self) -> Scalar {
        Scalar::I64(self.0)
    }
}
