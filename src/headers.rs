use crate::errors::HeaderNotFoundError;
use crate::models::{Field, HeaderIndexMap};

const PRODUCT_ALIASES: &[&str] = &["название", "продукт", "товар", "наименование"];
const PRICE_ALIASES: &[&str] = &["цена", "розница"];
const WEIGHT_ALIASES: &[&str] = &["фасовка", "масса", "вес"];

fn aliases(field: Field) -> &'static [&'static str] {
    match field {
        Field::Product => PRODUCT_ALIASES,
        Field::Price => PRICE_ALIASES,
        Field::Weight => WEIGHT_ALIASES,
    }
}

/// Finds the columns holding product, price and weight in a header row.
///
/// Matching is case-insensitive and exact; for each field the first header
/// (by position) found in that field's alias list wins.
///
/// # Arguments
/// * `headers` - The header row of a price list, in file order.
///
/// # Returns
/// The column index of each field, or the first field with no matching header.
pub fn resolve<I, S>(headers: I) -> Result<HeaderIndexMap, HeaderNotFoundError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lowered: Vec<String> = headers
        .into_iter()
        .map(|h| h.as_ref().to_lowercase())
        .collect();

    let position = |field: Field| {
        let names = aliases(field);
        lowered
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .ok_or(HeaderNotFoundError { field })
    };

    Ok(HeaderIndexMap::new(
        position(Field::Product)?,
        position(Field::Price)?,
        position(Field::Weight)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mixed_case_headers() -> Result<(), HeaderNotFoundError> {
        let map = resolve(["Наименование", "Розница", "Фасовка"])?;
        assert_eq!(map, HeaderIndexMap::new(0, 1, 2));
        Ok(())
    }

    #[test]
    fn test_resolve_reordered_columns_with_extras() -> Result<(), HeaderNotFoundError> {
        let map = resolve(["код", "вес", "id", "ЦЕНА", "товар"])?;
        assert_eq!(map.product_col(), 4);
        assert_eq!(map.price_col(), 3);
        assert_eq!(map.weight_col(), 1);
        Ok(())
    }

    #[test]
    fn test_resolve_takes_first_match() -> Result<(), HeaderNotFoundError> {
        let map = resolve(["продукт", "цена", "масса", "название", "розница", "вес"])?;
        assert_eq!(map, HeaderIndexMap::new(0, 1, 2));
        Ok(())
    }

    #[test]
    fn test_resolve_is_exact_not_prefix() {
        let err = resolve(["название", "цена за кг", "вес"]).unwrap_err();
        assert_eq!(err.field, Field::Price);
    }

    #[test]
    fn test_resolve_reports_missing_field() {
        let err = resolve(["name", "price", "weight"]).unwrap_err();
        assert_eq!(err.field, Field::Product);

        let err = resolve(["товар", "цена"]).unwrap_err();
        assert_eq!(err.field, Field::Weight);
    }

    #[test]
    fn test_resolve_empty_headers() {
        let headers: [&str; 0] = [];
        assert!(resolve(headers).is_err());
    }
}
