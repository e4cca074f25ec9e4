use crate::error::CodecError;
use crate::registry::CurrencyRegistry;
use crate::scalar::Scalar;
use metrics::counter;

/// Decoding from a driver [`Scalar`].
///
/// Implementors provide `from_scalar`; callers use `decode` (instrumented)
/// or [`Scan::scan`] (decode into an existing value).
pub trait FromScalar: Sized {
    /// Metric label for this type.
    const NAME: &'static str;
    /// How the type reads in error messages ("an Amount").
    const TARGET: &'static str;

    fn from_scalar<R>(scalar: &Scalar, registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized;

    fn decode<R>(scalar: &Scalar, registry: &R) -> Result<Self, CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let result = Self::from_scalar(scalar, registry);

        if let Err(err) = &result {
            tracing::debug!(
                codec = Self::NAME,
                kind = ?err.kind(),
                scalar = %scalar,
                error = %err,
                "scalar decode rejected"
            );
        }

        counter!("money_scalar.decode.total",
            "type" => Self::NAME,
            "status" => if result.is_ok() { "success" } else { "failed" }
        )
        .increment(1);

        result
    }
}

/// Decode into an existing value. The target is only overwritten when the
/// whole decode succeeds.
pub trait Scan {
    fn scan<R>(&mut self, scalar: &Scalar, registry: &R) -> Result<(), CodecError>
    where
        R: CurrencyRegistry + ?Sized;
}

impl<T: FromScalar> Scan for T {
    fn scan<R>(&mut self, scalar: &Scalar, registry: &R) -> Result<(), CodecError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        *self = T::decode(scalar, registry)?;
        Ok(())
    }
}
