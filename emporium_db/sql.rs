//! Statement builders for the generic entity mapping.
//!
//! Rows go in through `jsonb_populate_record` and come out through
//! `to_jsonb`, so a table only has to have one column per entity field.
//! Table and column names are interpolated, values never are.

use serde_json::Value;

use emporium_types::errors::DbError;

/// Quotes `name` as a PostgreSQL identifier. Only lowercase snake_case
/// names are accepted.
pub fn ident(name: &str) -> Result<String, DbError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !valid_start || !valid_rest || name.len() > 63 {
        return Err(DbError::InvalidColumn(name.to_string()));
    }
    Ok(format!("\"{name}\""))
}

/// `$1`: the record.
pub fn insert(table: &str) -> Result<String, DbError> {
    let table = ident(table)?;
    Ok(format!(
        "INSERT INTO {table} SELECT * FROM jsonb_populate_record(NULL::{table}, $1)"
    ))
}

/// `$1`: the record, `$2`: the id. Every field of `record` except `id` is
/// written.
pub fn update(table: &'static str, record: &Value) -> Result<String, DbError> {
    let Some(fields) = record.as_object() else {
        return Err(DbError::MalformedRecord(table));
    };

    let columns = fields
        .keys()
        .filter(|k| k.as_str() != "id")
        .map(|k| ident(k))
        .collect::<Result<Vec<_>, _>>()?;
    if columns.is_empty() {
        return Err(DbError::MalformedRecord(table));
    }

    let table = ident(table)?;
    let single = columns.len() == 1;
    let columns = columns.join(", ");
    // A single-column target list must not be parenthesized.
    let target = if single {
        columns.clone()
    } else {
        format!("({columns})")
    };

    Ok(format!(
        "UPDATE {table} AS t SET {target} = \
         (SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)) \
         WHERE t.id = $2"
    ))
}

/// `$1`: the id.
pub fn delete(table: &str) -> Result<String, DbError> {
    Ok(format!("DELETE FROM {} WHERE id = $1", ident(table)?))
}

/// `$1`: the id.
pub fn select_by_id(table: &str) -> Result<String, DbError> {
    Ok(format!(
        "SELECT to_jsonb(t) FROM {} t WHERE t.id = $1",
        ident(table)?
    ))
}

/// With `filtered`, `$1` is a JSON object the row must contain.
pub fn select(table: &str, filtered: bool) -> Result<String, DbError> {
    let mut sql = format!("SELECT to_jsonb(t) FROM {} t", ident(table)?);
    if filtered {
        sql.push_str(" WHERE to_jsonb(t) @> $1");
    }
    Ok(sql)
}
