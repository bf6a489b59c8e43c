use crate::error::{Result, TabularError};
use crate::reader::Table;
use cardex_core::domain::{FieldKind, REQUIRED_FIELDS};
use std::collections::HashMap;

/// Options for one normalization run, fixed up front by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub auto_name: bool,
    pub name_prefix: String,
    pub fix_phone: bool,
    pub phone_prefix: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            auto_name: false,
            name_prefix: "P".to_string(),
            fix_phone: false,
            phone_prefix: String::new(),
        }
    }
}

/// Turn raw tabular input into one column-name/value map per row.
///
/// The step order is a correctness invariant: header validation must see the
/// header after name synthesis, and phone rewriting must see final column
/// indices.
pub fn normalize_rows(
    mut table: Table,
    options: &NormalizeOptions,
) -> Result<Vec<HashMap<String, String>>> {
    lowercase_header(&mut table.header);
    let width = table.header.len();
    for row in &mut table.rows {
        pad(row, width, false);
    }

    if options.auto_name {
        synthesize_names(&mut table, &options.name_prefix)?;
    }
    validate_header(&table.header)?;
    if options.fix_phone {
        rewrite_phones(&mut table, &options.phone_prefix)?;
    }

    let Table { header, rows } = table;
    Ok(rows
        .into_iter()
        .map(|row| zip_row(&header, row))
        .collect())
}

fn lowercase_header(header: &mut [String]) {
    for name in header.iter_mut() {
        *name = name.to_lowercase();
    }
}

/// Pad `row` with empty cells up to `length`, at the end by default or at the
/// start with `first`. Rows already at or beyond `length` are left alone.
pub fn pad(row: &mut Vec<String>, length: usize, first: bool) {
    if row.len() >= length {
        return;
    }
    if first {
        let fill = length - row.len();
        row.splice(0..0, std::iter::repeat_with(String::new).take(fill));
    } else {
        row.resize(length, String::new());
    }
}

// Runs against the already lower-cased header, so `Name` and `name` collide
// alike.
fn synthesize_names(table: &mut Table, prefix: &str) -> Result<()> {
    let name = FieldKind::Name.column_name();
    if table.header.iter().any(|column| column == name) {
        return Err(TabularError::AutoNameConflict);
    }

    table.header.push(name.to_string());
    for (index, row) in table.rows.iter_mut().enumerate() {
        row.push(format!("{}{}", prefix, index + 1));
    }
    Ok(())
}

fn validate_header(header: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .map(|kind| kind.column_name())
        .filter(|name| !header.iter().any(|column| column == name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TabularError::InvalidHeader { missing })
    }
}

fn rewrite_phones(table: &mut Table, prefix: &str) -> Result<()> {
    let phone = FieldKind::Phone.column_name();
    let index = table
        .header
        .iter()
        .position(|column| column == phone)
        .ok_or(TabularError::MissingPhoneColumn)?;

    for row in &mut table.rows {
        if let Some(cell) = row.get_mut(index) {
            *cell = format!("{}{}", prefix, cell);
        }
    }
    Ok(())
}

// Zipping stops at header length, so cells beyond the header are dropped.
fn zip_row(header: &[String], row: Vec<String>) -> HashMap<String, String> {
    header.iter().cloned().zip(row).collect()
}
