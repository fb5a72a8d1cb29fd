use getset::{CopyGetters, Getters};
use std::fmt;

/// Canonical columns every price list is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Product,
    Price,
    Weight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Product => "product",
            Field::Price => "price",
            Field::Weight => "weight",
        };
        f.write_str(name)
    }
}

/// Column positions of the canonical fields within one file's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct HeaderIndexMap {
    #[getset(get_copy = "pub")]
    product_col: usize,
    #[getset(get_copy = "pub")]
    price_col: usize,
    #[getset(get_copy = "pub")]
    weight_col: usize,
}

impl HeaderIndexMap {
    pub fn new(product_col: usize, price_col: usize, weight_col: usize) -> Self {
        Self {
            product_col,
            price_col,
            weight_col,
        }
    }

    pub fn column(&self, field: Field) -> usize {
        match field {
            Field::Product => self.product_col,
            Field::Price => self.price_col,
            Field::Weight => self.weight_col,
        }
    }
}

/// A normalized price-list entry.
///
/// Fields are private so a `Record` can only be built through [`Record::new`],
/// which fixes `unit_price` at creation.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Record {
    #[getset(get = "pub")]
    product: String,
    #[getset(get_copy = "pub")]
    price: f64,
    #[getset(get_copy = "pub")]
    weight: f64,
    #[getset(get = "pub")]
    source_label: String,
    #[getset(get_copy = "pub")]
    unit_price: f64,
}

impl Record {
    /// Builds a record from already validated values.
    ///
    /// # Arguments
    /// * `product` - Product name as read from the source.
    /// * `price` - Finite, non-negative price.
    /// * `weight` - Finite, strictly positive weight.
    /// * `source_label` - Name of the originating file.
    pub(crate) fn new(product: String, price: f64, weight: f64, source_label: String) -> Self {
        Self {
            product,
            price,
            weight,
            source_label,
            unit_price: price / weight,
        }
    }
}
