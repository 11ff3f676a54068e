use std::collections::BTreeMap;

use regex::Regex;
use sqlx::{Postgres, QueryBuilder};

use crate::shared::infrastructure::persistence::persistence_error::PersistenceError;

lazy_static::lazy_static! {
    static ref COLUMN_NAME_REGEX: Regex = Regex::new("^[a-z_][a-z0-9_]*$").expect("valid regex");
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

/// Appends ` WHERE a = $1 AND b = $2 ...` for every criterion, columns in
/// name order. Nothing is appended for empty criteria.
pub fn push_and_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    criteria: &BTreeMap<String, FilterValue>,
) -> Result<(), PersistenceError> {
    if let Some(column) = criteria.keys().find(|column| !COLUMN_NAME_REGEX.is_match(column)) {
        return Err(PersistenceError::InvalidFilterColumn(column.clone()));
    }

    for (index, (column, value)) in criteria.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column.as_str());
        builder.push(" = ");

        match value {
            FilterValue::Text(text) => builder.push_bind(text.clone()),
            FilterValue::Integer(number) => builder.push_bind(*number),
            FilterValue::Boolean(flag) => builder.push_bind(*flag),
        };
    }

    Ok(())
}
