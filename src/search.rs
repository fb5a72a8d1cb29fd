use crate::{catalog::Catalog, models::Record, traits::Search};
use std::cmp::Ordering;

/// Case-insensitive product search over a loaded [`Catalog`].
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Search for SearchEngine<'_> {
    fn find(&self, query: &str) -> Vec<Record> {
        // An empty query is a substring of every name, so it matches everything.
        let needle = query.to_lowercase();
        let mut found: Vec<Record> = self
            .catalog
            .records()
            .iter()
            .filter(|record| record.product().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        // sort_by is stable: equal unit prices keep catalog order.
        found.sort_by(|a, b| {
            a.unit_price()
                .partial_cmp(&b.unit_price())
                .unwrap_or(Ordering::Equal)
        });
        found
    }
}
