//! Driver bridges. Each one converts between its driver's native values and
//! [`Scalar`](crate::Scalar), and exposes the codec types as column types.

#[cfg(feature = "postgres")]
pub mod postgres;
