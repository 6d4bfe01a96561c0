//! `ToSql` / `FromSql` for the value objects.
//!
//! The wire format is the one `postgres-types` already uses for chrono's
//! `NaiveDate` (`date`) and `NaiveTime` (`time`), so the value objects can be
//! bound as query parameters and read from rows directly.

use super::{SimpleDate, SimpleDateImmutable, SimpleTime, SimpleTimeImmutable, SimpleValue};
use bytes::BytesMut;
use chrono::{NaiveDate, NaiveTime};
use postgres_types::{to_sql_checked, FromSql, IsNull, ToSql, Type};
use std::error::Error;

type BoxError = Box<dyn Error + Sync + Send>;

macro_rules! impl_postgres_types {
    ($($name:ident => $native:ty),+ $(,)?) => {
        $(
            impl<'a> FromSql<'a> for $name {
                fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, BoxError> {
                    <$native as FromSql>::from_sql(ty, raw).map(<$name as SimpleValue>::from_native)
                }

                fn accepts(ty: &Type) -> bool {
                    <$native as FromSql>::accepts(ty)
                }
            }

            impl ToSql for $name {
                fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
                    self.native().to_sql(ty, out)
                }

                fn accepts(ty: &Type) -> bool {
                    <$native as ToSql>::accepts(ty)
                }

                to_sql_checked!();
            }
        )+
    };
}

impl_postgres_types!(
    SimpleDate => NaiveDate,
    SimpleDateImmutable => NaiveDate,
    SimpleTime => NaiveTime,
    SimpleTimeImmutable => NaiveTime,
);
