use chrono::{DateTime, Utc};
use std::fmt;

/// A primitive value as exchanged with a SQL driver.
///
/// This is the only shape the codecs read from and write to. Drivers that
/// hand back richer types convert into a `Scalar` first (see
/// `adapters::postgres`).
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

/// The runtime kind of a [`Scalar`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Text,
    Bytes,
    Timestamp,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Null => "null",
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "int8",
            ScalarKind::I16 => "int16",
            ScalarKind::I32 => "int32",
            ScalarKind::I64 => "int64",
            ScalarKind::F32 => "float32",
            ScalarKind::F64 => "float64",
            ScalarKind::Text => "string",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Timestamp => "timestamp",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::Null,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Text(_) => ScalarKind::Text,
            Scalar::Bytes(_) => ScalarKind::Bytes,
            Scalar::Timestamp(_) => ScalarKind::Timestamp,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Any signed integer kind, widened to 64 bits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::I8(i) => Some(i64::from(*i)),
            Scalar::I16(i) => Some(i64::from(*i)),
            Scalar::I32(i) => Some(i64::from(*i)),
            Scalar::I64(i) => Some(*i),
            _ => None,
        }
    }
}

/// Quotes text the way it appears in diagnostics: `"USD 100"`, `42`, `null`.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::I8(i) => write!(f, "{}", i),
            Scalar::I16(i) => write!(f, "{}", i),
            Scalar::I32(i) => write!(f, "{}", i),
            Scalar::I64(i) => write!(f, "{}", i),
            Scalar::F32(v) => write!(f, "{:?}", v),
            Scalar::F64(v) => write!(f, "{:?}", v),
            Scalar::Text(s) => write!(f, "{:?}", s),
            Scalar::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Scalar::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

// Helper trait to convert types to Scalar
pub trait ToScalar {
    fn to_scalar(&self) -> Scalar;
}

impl ToScalar for Scalar {
    fn to_scalar(&self) -> Scalar {
        self.clone()
    }
}

impl ToScalar for String {
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }
}

impl ToScalar for &str {
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.to_string())
    }
}

impl ToScalar for bool {
    fn to_scalar(&self) -> Scalar {
        Scalar::Bool(*self)
    }
}

impl ToScalar for i8 {
    fn to_scalar(&self) -> Scalar {
        Scalar::I8(*self)
    }
}

impl ToScalar for i16 {
    fn to_scalar(&self) -> Scalar {
        Scalar::I16(*self)
    }
}

impl ToScalar for i32 {
    fn to_scalar(&self) -> Scalar {
        Scalar::I32(*self)
    }
}

impl ToScalar for i64 {
    fn to_scalar(&self) -> Scalar {
        Scalar::I64(*self)
    }
}

impl ToScalar for f32 {
    fn to_scalar(&self) -> Scalar {
        Scalar::F32(*self)
    }
}

impl ToScalar for f64 {
    fn to_scalar(&self) -> Scalar {
        Scalar::F64(*self)
    }
}

impl ToScalar for Vec<u8> {
    fn to_scalar(&self) -> Scalar {
        Scalar::Bytes(self.clone())
    }
}

impl ToScalar for DateTime<Utc> {
    fn to_scalar(&self) -> Scalar {
        Scalar::Timestamp(*self)
    }
}

impl<T: ToScalar> ToScalar for Option<T> {
    fn to_scalar(&self) -> Scalar {
        match self {
            Some(v) => v.to_scalar(),
            None => Scalar::Null,
        }
    }
}
