use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, TypeInfo, ValueRef};
use utoipa::ToSchema;

use crate::utils::db_utils::SqlValue;

/// Day a timesheet covers, kept in whatever form the client sent it:
/// an epoch timestamp or a date string such as `2026-01-01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TimesheetDate {
    Timestamp(i64),
    Fractional(f64),
    Text(String),
}

impl From<TimesheetDate> for SqlValue {
    fn from(v: TimesheetDate) -> Self {
        match v {
            TimesheetDate::Timestamp(n) => SqlValue::I64(n),
            TimesheetDate::Fractional(n) => SqlValue::F64(n),
            TimesheetDate::Text(s) => SqlValue::String(s),
        }
    }
}

impl sqlx::Type<Sqlite> for TimesheetDate {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

// The column has no declared type, so each row decodes by its storage class.
impl<'r> Decode<'r, Sqlite> for TimesheetDate {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let storage_class = value.type_info().name().to_owned();
        match storage_class.as_str() {
            "INTEGER" => Ok(Self::Timestamp(<i64 as Decode<Sqlite>>::decode(value)?)),
            "REAL" => Ok(Self::Fractional(<f64 as Decode<Sqlite>>::decode(value)?)),
            _ => Ok(Self::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Timesheet {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 8.0)]
    pub hours: f64,

    #[schema(example = 18.5)]
    pub rate: f64,

    pub date: TimesheetDate,

    #[schema(example = 1)]
    pub employee_id: i64,
}
