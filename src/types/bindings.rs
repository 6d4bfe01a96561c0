//! The four built-in column types.

use super::binding::TypeBinding;
use super::kind::ColumnKind;
use crate::value::{SimpleDate, SimpleDateImmutable, SimpleTime, SimpleTimeImmutable};

/// `simple_date`: mutable [`SimpleDate`] in a `DATE` column
pub const SIMPLE_DATE: TypeBinding<SimpleDate> =
    TypeBinding::new("simple_date", ColumnKind::Date, SimpleDate::from_string);

/// `simple_date_immutable`: [`SimpleDateImmutable`] in a `DATE` column
pub const SIMPLE_DATE_IMMUTABLE: TypeBinding<SimpleDateImmutable> = TypeBinding::new(
    "simple_date_immutable",
    ColumnKind::Date,
    SimpleDateImmutable::from_string,
);

/// `simple_time`: mutable [`SimpleTime`] in a `TIME` column
pub const SIMPLE_TIME: TypeBinding<SimpleTime> =
    TypeBinding::new("simple_time", ColumnKind::Time, SimpleTime::from_string);

/// `simple_time_immutable`: [`SimpleTimeImmutable`] in a `TIME` column
pub const SIMPLE_TIME_IMMUTABLE: TypeBinding<SimpleTimeImmutable> = TypeBinding::new(
    "simple_time_immutable",
    ColumnKind::Time,
    SimpleTimeImmutable::from_string,
);
