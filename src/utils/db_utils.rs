use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    I64(i64),
    F64(f64),
    Bool(bool),
    Null,
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::String(v.to_owned())
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for value in $values {
            query = match value {
                SqlValue::String(v) => query.bind(v),
                SqlValue::I64(v) => query.bind(v),
                SqlValue::F64(v) => query.bind(v),
                SqlValue::Bool(v) => query.bind(v),
                SqlValue::Null => query.bind(None::<String>),
            };
        }
        query
    }};
}

/// Binds positional `?` parameters in order.
pub fn bind_all<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    bind_values!(query, values)
}

/// Same as [`bind_all`] for row-mapping queries.
pub fn bind_all_as<'q, T>(
    query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, T, SqliteArguments<'q>> {
    bind_values!(query, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timesheet::TimesheetDate;

    #[test]
    fn optional_values_become_null() {
        let none: Option<String> = None;
        assert_eq!(SqlValue::from(none), SqlValue::Null);
        assert_eq!(
            SqlValue::from(Some("soup".to_string())),
            SqlValue::String("soup".into())
        );
    }

    #[test]
    fn timesheet_dates_bind_with_their_own_type() {
        assert_eq!(
            SqlValue::from(TimesheetDate::Timestamp(1_700_000_000_000)),
            SqlValue::I64(1_700_000_000_000)
        );
        assert_eq!(
            SqlValue::from(TimesheetDate::Text("2026-01-01".into())),
            SqlValue::String("2026-01-01".into())
        );
    }
}
