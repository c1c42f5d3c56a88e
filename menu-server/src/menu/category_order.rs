//! Menu section ordering

use shared::models::{ProductCategory, UnknownCategory};

/// Rank table for menu sections
///
/// Categories listed come first, in list order. Categories missing from the
/// list follow in their canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    ranks: Vec<ProductCategory>,
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self {
            ranks: ProductCategory::ALL.to_vec(),
        }
    }
}

impl CategoryOrder {
    /// Duplicates keep their first position
    pub fn new(ranks: impl IntoIterator<Item = ProductCategory>) -> Self {
        let mut unique = Vec::new();
        for category in ranks {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self { ranks: unique }
    }

    /// Parse a comma-separated label list (`"Bebidas,Entradas"`).
    /// Blank items are skipped.
    pub fn from_labels(labels: &str) -> Result<Self, UnknownCategory> {
        let ranks = labels
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ProductCategory>, _>>()?;
        Ok(Self::new(ranks))
    }

    /// Sort key: (position in table, canonical position)
    pub fn rank(&self, category: ProductCategory) -> (usize, usize) {
        let listed = self
            .ranks
            .iter()
            .position(|c| *c == category)
            .unwrap_or(self.ranks.len());
        let canonical = ProductCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(ProductCategory::ALL.len());
        (listed, canonical)
    }

    pub fn categories(&self) -> &[ProductCategory] {
        &self.ranks
    }
}
