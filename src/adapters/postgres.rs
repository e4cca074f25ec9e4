use chrono::{DateTime, Utc};
use sqlx::{
    Decode, Encode, Postgres, Row, Type, TypeInfo, ValueRef,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgRow, PgTypeInfo, PgValueRef},
};

use crate::{
    Amount, CodecError, Currency, FromScalar, Money, Scalar,
    registry::{CurrencyRegistry, EmptyRegistry},
};

/// Postgres column types that have a [`Scalar`] counterpart.
///
/// | Postgres | Scalar |
/// |---|---|
/// | `BOOL` | `Bool` |
/// | `"CHAR"` | `I8` |
/// | `INT2` / `INT4` / `INT8` | `I16` / `I32` / `I64` |
/// | `FLOAT4` / `FLOAT8` | `F32` / `F64` |
/// | `TEXT` / `VARCHAR` / `BPCHAR` / `NAME` | `Text` |
/// | `BYTEA` | `Bytes` |
/// | `TIMESTAMPTZ` | `Timestamp` |
fn is_scalar_column(ty: &PgTypeInfo) -> bool {
    <bool as Type<Postgres>>::compatible(ty)
        || <i8 as Type<Postgres>>::compatible(ty)
        || <i16 as Type<Postgres>>::compatible(ty)
        || <i32 as Type<Postgres>>::compatible(ty)
        || <i64 as Type<Postgres>>::compatible(ty)
        || <f32 as Type<Postgres>>::compatible(ty)
        || <f64 as Type<Postgres>>::compatible(ty)
        || <String as Type<Postgres>>::compatible(ty)
        || <Vec<u8> as Type<Postgres>>::compatible(ty)
        || <DateTime<Utc> as Type<Postgres>>::compatible(ty)
}

impl Type<Postgres> for Scalar {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        is_scalar_column(ty)
    }
}

impl<'r> Decode<'r, Postgres> for Scalar {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Scalar::Null);
        }

        let ty = value.type_info().into_owned();
        let scalar = match ty.name() {
            "BOOL" => Scalar::Bool(<bool as Decode<Postgres>>::decode(value)?),
            "\"CHAR\"" => Scalar::I8(<i8 as Decode<Postgres>>::decode(value)?),
            "INT2" => Scalar::I16(<i16 as Decode<Postgres>>::decode(value)?),
            "INT4" => Scalar::I32(<i32 as Decode<Postgres>>::decode(value)?),
            "INT8" => Scalar::I64(<i64 as Decode<Postgres>>::decode(value)?),
            "FLOAT4" => Scalar::F32(<f32 as Decode<Postgres>>::decode(value)?),
            "FLOAT8" => Scalar::F64(<f64 as Decode<Postgres>>::decode(value)?),
            "BYTEA" => Scalar::Bytes(<Vec<u8> as Decode<Postgres>>::decode(value)?),
            "TIMESTAMPTZ" => {
                Scalar::Timestamp(<DateTime<Utc> as Decode<Postgres>>::decode(value)?)
            }
            _ if <String as Type<Postgres>>::compatible(&ty) => {
                Scalar::Text(<String as Decode<Postgres>>::decode(value)?)
            }
            other => return Err(format!("Postgres type {} has no scalar mapping", other).into()),
        };

        Ok(scalar)
    }
}

impl Encode<'_, Postgres> for Scalar {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self {
            Scalar::Null => Ok(IsNull::Yes),
            Scalar::Bool(v) => <bool as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::I8(v) => <i8 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::I16(v) => <i16 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::I32(v) => <i32 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::I64(v) => <i64 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::F32(v) => <f32 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::F64(v) => <f64 as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::Text(v) => <String as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::Bytes(v) => <Vec<u8> as Encode<Postgres>>::encode_by_ref(v, buf),
            Scalar::Timestamp(v) => <DateTime<Utc> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        let ty = match self {
            Scalar::Null => return None,
            Scalar::Bool(_) => <bool as Type<Postgres>>::type_info(),
            Scalar::I8(_) => <i8 as Type<Postgres>>::type_info(),
            Scalar::I16(_) => <i16 as Type<Postgres>>::type_info(),
            Scalar::I32(_) => <i32 as Type<Postgres>>::type_info(),
            Scalar::I64(_) => <i64 as Type<Postgres>>::type_info(),
            Scalar::F32(_) => <f32 as Type<Postgres>>::type_info(),
            Scalar::F64(_) => <f64 as Type<Postgres>>::type_info(),
            Scalar::Text(_) => <String as Type<Postgres>>::type_info(),
            Scalar::Bytes(_) => <Vec<u8> as Type<Postgres>>::type_info(),
            Scalar::Timestamp(_) => <DateTime<Utc> as Type<Postgres>>::type_info(),
        };
        Some(ty)
    }
}

/// Binds as `INT8`; reads from any integer or text column.
impl Type<Postgres> for Amount {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i8 as Type<Postgres>>::compatible(ty)
            || <i16 as Type<Postgres>>::compatible(ty)
            || <i32 as Type<Postgres>>::compatible(ty)
            || <i64 as Type<Postgres>>::compatible(ty)
            || <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for Amount {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let scalar = <Scalar as Decode<Postgres>>::decode(value)?;
        Ok(<Amount as FromScalar>::decode(&scalar, &EmptyRegistry)?)
    }
}

impl Encode<'_, Postgres> for Amount {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Postgres>>::encode_by_ref(&self.value(), buf)
    }
}

/// Binds the code as `TEXT`. Reading a currency needs a registry, see
/// [`PgRowExt::try_get_currency`].
impl Type<Postgres> for Currency {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Currency {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode_by_ref(&self.code(), buf)
    }
}

fn column_decode(column: &str, err: CodecError) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: format!("{:?}", column),
        source: Box::new(err),
    }
}

/// Reads codec types out of a row with an injected registry.
pub trait PgRowExt {
    fn try_get_scalar(&self, column: &str) -> Result<Scalar, sqlx::Error>;

    fn try_decode<T, R>(&self, column: &str, registry: &R) -> Result<T, sqlx::Error>
    where
        T: FromScalar,
        R: CurrencyRegistry + ?Sized;

    fn try_get_currency<R>(&self, column: &str, registry: &R) -> Result<Currency, sqlx::Error>
    where
        R: CurrencyRegistry + ?Sized,
    {
        self.try_decode(column, registry)
    }

    /// Reads a combined `"USD 100"` column, or an integer column whose
    /// currency the caller attaches afterwards.
    fn try_get_money<R>(&self, column: &str, registry: &R) -> Result<Money, sqlx::Error>
    where
        R: CurrencyRegistry + ?Sized,
    {
        self.try_decode(column, registry)
    }
}

impl PgRowExt for PgRow {
    fn try_get_scalar(&self, column: &str) -> Result<Scalar, sqlx::Error> {
        self.try_get::<Scalar, _>(column)
    }

    fn try_decode<T, R>(&self, column: &str, registry: &R) -> Result<T, sqlx::Error>
    where
        T: FromScalar,
        R: CurrencyRegistry + ?Sized,
    {
        let scalar = self.try_get_scalar(column)?;
        <T as FromScalar>::decode(&scalar, registry).map_err(|e| column_decode(column, e))
    }
}
