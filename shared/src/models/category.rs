//! Product Category

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Menu category. Serialized with the exact labels printed on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Entradas")]
    Entradas,
    #[serde(rename = "Pratos principais")]
    PratosPrincipais,
    #[serde(rename = "Sobremesas")]
    Sobremesas,
    #[serde(rename = "Bebidas")]
    Bebidas,
}

impl ProductCategory {
    /// Canonical menu order
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Entradas,
        ProductCategory::PratosPrincipais,
        ProductCategory::Sobremesas,
        ProductCategory::Bebidas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Entradas => "Entradas",
            ProductCategory::PratosPrincipais => "Pratos principais",
            ProductCategory::Sobremesas => "Sobremesas",
            ProductCategory::Bebidas => "Bebidas",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
