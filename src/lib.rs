//! # money-scalar
//!
//! Persist `Money` through SQL drivers that only speak primitive scalars.
//!
//! A monetary value is an [`Amount`] (signed minor units, cents for USD)
//! plus a [`Currency`] resolved from a [`CurrencyRegistry`]. This crate maps
//! those types to and from driver [`Scalar`]s and nothing more: there is no
//! arithmetic, formatting or schema management here.
//!
//! ## Storage encodings
//!
//! | Column | Content | Decodes to |
//! |--------|---------|------------|
//! | string | `"USD 100"` (one space) | [`Money`] with both halves |
//! | integer | `100` | [`Money`] with no currency (attach the column default) |
//! | string | `"USD"` | [`Currency`] |
//! | string or integer | `"100"` / `100` | [`Amount`] |
//!
//! ```rust
//! use money_scalar::{Amount, Currency, CurrencyTable, FromScalar, Money, Scalar, ToScalar};
//!
//! let registry = CurrencyTable::new().with(Currency::new("USD", 2, "$"));
//!
//! let money = Money::decode(&Scalar::Text("USD 1050".into()), &registry)?;
//! assert_eq!(money.amount(), Amount::new(1050));
//!
//! // Money has no combined encode; write the halves to their own columns.
//! assert_eq!(money.amount().to_scalar(), Scalar::I64(1050));
//! assert_eq!(money.currency().map(ToScalar::to_scalar), Some(Scalar::Text("USD".into())));
//! # Ok::<(), money_scalar::CodecError>(())
//! ```
//!
//! ## Failure semantics
//!
//! Decoding returns a fresh value or an error. [`Scan::scan`] writes into an
//! existing value only after the whole decode succeeded, so a failed scan
//! never leaves a half-updated `Money` behind.
//!
//! ## Feature flags
//!
//! | Flag       | Default | Description                                  |
//! |------------|---------|----------------------------------------------|
//! | `postgres` | ✓       | sqlx Postgres column types and row helpers   |

pub mod adapters;
pub mod amount;
pub mod codec;
pub mod currency;
pub mod error;
pub mod money;
pub mod registry;
pub mod scalar;

pub use amount::Amount;
pub use codec::{FromScalar, Scan};
pub use currency::Currency;
pub use error::{CodecError, ErrorKind, MoneyField};
pub use money::Money;
pub use registry::{CurrencyRegistry, CurrencyTable, EmptyRegistry};
pub use scalar::{Scalar, ScalarKind, ToScalar};

#[cfg(feature = "postgres")]
pub use adapters::postgres::PgRowExt;
