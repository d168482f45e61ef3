//! Builds parameterized SELECT, INSERT and DELETE text for a table descriptor.

/// Table name plus the column list every read returns, `id` first.
#[derive(Clone, Copy, Debug)]
pub struct TableRef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Quote identifier (safe: only from compile-time descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row, oldest id first.
pub fn select_list(table: &TableRef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table.columns),
        quoted(table.name),
        quoted("id")
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &TableRef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table.columns),
        quoted(table.name),
        quoted("id")
    )
}

/// INSERT of `columns` as `$1..$n`, returning the row id.
pub fn insert_returning_id(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        column_list(columns),
        placeholders.join(", "),
        quoted("id")
    )
}

/// DELETE by primary key. Caller binds the id as `$1`.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted("id"))
}

/// Move a PostgreSQL identity sequence past the highest id in `table`.
/// Needed after an insert that supplied its own id.
pub fn sync_identity_sequence(table: &str) -> String {
    format!(
        "SELECT setval(pg_get_serial_sequence('{}', 'id'), GREATEST((SELECT MAX({}) FROM {}), 1))",
        table.replace('\'', "''"),
        quoted("id"),
        quoted(table)
    )
}
