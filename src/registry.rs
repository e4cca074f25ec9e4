use crate::currency::Currency;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only lookup from currency code to [`Currency`].
///
/// Implementations must answer synchronously and return `None` for codes
/// they do not know. Codes are matched exactly as stored.
pub trait CurrencyRegistry: Send + Sync {
    fn get_currency(&self, code: &str) -> Option<Currency>;
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for Arc<R> {
    fn get_currency(&self, code: &str) -> Option<Currency> {
        self.as_ref().get_currency(code)
    }
}

/// Registry backed by a lookup function, see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps an existing lookup (`GetCurrency`-style function) as a registry.
pub fn from_fn<F>(lookup: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<Currency> + Send + Sync,
{
    FromFn(lookup)
}

impl<F> CurrencyRegistry for FromFn<F>
where
    F: Fn(&str) -> Option<Currency> + Send + Sync,
{
    fn get_currency(&self, code: &str) -> Option<Currency> {
        (self.0)(code)
    }
}

/// In-memory registry keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    currencies: HashMap<String, Currency>,
}

impl CurrencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, currency: Currency) -> Self {
        self.insert(currency);
        self
    }

    /// Returns the previous entry for the same code, if any.
    pub fn insert(&mut self, currency: Currency) -> Option<Currency> {
        self.currencies.insert(currency.code().to_string(), currency)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl FromIterator<Currency> for CurrencyTable {
    fn from_iter<I: IntoIterator<Item = Currency>>(iter: I) -> Self {
        let mut table = Self::new();
        for currency in iter {
            table.insert(currency);
        }
        table
    }
}

impl CurrencyRegistry for CurrencyTable {
    fn get_currency(&self, code: &str) -> Option<Currency> {
        self.currencies.get(code).cloned()
    }
}

/// A registry that knows no currencies. Enough for decoding amounts, which
/// never consult the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl CurrencyRegistry for EmptyRegistry {
    fn get_currency(&self, _code: &str) -> Option<Currency> {
        None
    }
}
