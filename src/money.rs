use crate::amount::Amount;
use crate::codec::FromScalar;
use crate::currency::Currency;
use crate::error::{CodecError, MoneyField};
use crate::registry::CurrencyRegistry;
use crate::scalar::Scalar;
use serde::Serialize;

/// Separator of the combined `"<CODE> <INTEGER>"` column format.
pub const COMBINED_DELIMITER: char = ' ';

/// An amount together with the currency it is counted in.
///
/// Decoded from either a combined `"USD 100"` string, which resolves both
/// halves, or a bare integer column, which leaves the currency `None` for
/// the application to fill in with its default (see [`Money::with_currency`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    amount: Amount,
    currency: Option<Currency>,
}

impl Money {
    pub fn new(amount: Amount, currency: Currency) -> Self {
        Self {
            amount,
            currency: Some(currency),
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.currency.is_some()
    }

    /// Attach a currency, e.g. the column default for integer-only storage.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    fn from_combined<R>(raw: &str, registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let mut parts = raw.split(COMBINED_DELIMITER);
        let (code, amount) = match (parts.next(), parts.next(), parts.next()) {
            (Some(code), Some(amount), None) if !code.is_empty() && !amount.is_empty() => {
                (code, amount)
            }
            _ => {
                return Err(CodecError::MalformedMoneyScalar {
                    raw: format!("{:?}", raw),
                });
            }
        };

        let code_scalar = Scalar::Text(code.to_string());
        let currency = Currency::from_scalar(&code_scalar, registry)
            .map_err(|e| CodecError::field(MoneyField::Currency, code_scalar.to_string(), e))?;

        let amount_scalar = Scalar::Text(amount.to_string());
        let amount = Amount::from_scalar(&amount_scalar, registry)
            .map_err(|e| CodecError::field(MoneyField::Amount, amount_scalar.to_string(), e))?;

        Ok(Self::new(amount, currency))
    }
}

impl FromScalar for Money {
    const NAME: &'static str = "money";
    const TARGET: &'static str = "Money";

    fn from_scalar<R>(scalar: &Scalar, registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let money = match scalar {
            Scalar::Text(raw) => Self::from_combined(raw, registry)?,
            integer if integer.kind().is_integer() => {
                let amount = Amount::from_scalar(integer, registry)
                    .map_err(|e| CodecError::field(MoneyField::Amount, integer.to_string(), e))?;
                Self {
                    amount,
                    currency: None,
                }
            }
            other => return Err(CodecError::unsupported(Self::TARGET, other)),
        };

        tracing::trace!(
            amount = money.amount.value(),
            currency = money.currency.as_ref().map(Currency::code),
            "decoded money"
        );

        Ok(money)
    }
}
