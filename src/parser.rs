use crate::errors::RowError;
use crate::models::{Field, HeaderIndexMap, Record};

/// Converts one data row into a [`Record`].
///
/// # Arguments
/// * `row` - Cells of the row, in file order.
/// * `indices` - Column positions resolved from the file's header row.
/// * `source_label` - Name of the file the row comes from.
///
/// # Returns
/// The record, or the reason the row cannot be used.
pub fn parse<S: AsRef<str>>(
    row: &[S],
    indices: &HeaderIndexMap,
    source_label: &str,
) -> Result<Record, RowError> {
    let product = cell(row, indices, Field::Product)?;
    if product.is_empty() {
        return Err(RowError::MissingField(Field::Product));
    }

    let price = number(row, indices, Field::Price)?;
    let weight = number(row, indices, Field::Weight)?;

    if weight == 0.0 {
        return Err(RowError::DivisionByZero);
    }
    if price <= 0.0 {
        return Err(RowError::NonPositive { field: Field::Price });
    }
    if weight < 0.0 {
        return Err(RowError::NonPositive {
            field: Field::Weight,
        });
    }

    Ok(Record::new(
        product.to_owned(),
        price,
        weight,
        source_label.to_owned(),
    ))
}

fn cell<'a, S: AsRef<str>>(
    row: &'a [S],
    indices: &HeaderIndexMap,
    field: Field,
) -> Result<&'a str, RowError> {
    row.get(indices.column(field))
        .map(|c| c.as_ref())
        .ok_or(RowError::MissingField(field))
}

fn number<S: AsRef<str>>(
    row: &[S],
    indices: &HeaderIndexMap,
    field: Field,
) -> Result<f64, RowError> {
    let raw = cell(row, indices, field)?;
    match raw.trim().parse::<f64>() {
        // Adding 0.0 turns -0.0 into 0.0.
        Ok(value) if value.is_finite() => Ok(value + 0.0),
        _ => Err(RowError::InvalidNumber {
            field,
            raw: raw.to_owned(),
        }),
    }
}
