//! Product Catalog
//!
//! The read-only list of purchasable products. The catalog is an immutable
//! value injected into the session at construction, so tests can swap in
//! their own products without touching dispatch logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Roast level of a coffee product
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roast {
    /// Light roast
    Light,
    /// Medium roast
    Medium,
    /// Medium-dark roast
    MediumDark,
    /// Dark roast
    Dark,
}

impl Roast {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::MediumDark => "Medium-Dark",
            Self::Dark => "Dark",
        }
    }
}

/// A purchasable product. Defined at process start, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price (non-negative)
    pub price: Decimal,
    /// One-line description
    pub description: String,
    /// Country of origin
    pub origin: String,
    /// Roast level
    pub roast: Roast,
}

impl Product {
    /// Create a product
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        origin: impl Into<String>,
        roast: Roast,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            origin: origin.into(),
            roast,
        }
    }
}

/// An immutable, ordered product catalog.
///
/// Products are selected by 1-based index, matching the digit keys shown
/// on the shop screen.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The standard coffee catalog
    pub fn coffee() -> Self {
        Self::new(vec![
            Product::new(
                "brazilian-blend",
                "Brazilian Blend",
                Decimal::new(2500, 2),
                "Smooth and rich Brazilian coffee beans with chocolate notes",
                "Brazil",
                Roast::Medium,
            ),
            Product::new(
                "colombian-supreme",
                "Colombian Supreme",
                Decimal::new(2800, 2),
                "Premium Colombian single-origin with bright acidity",
                "Colombia",
                Roast::MediumDark,
            ),
            Product::new(
                "ethiopian-single",
                "Ethiopian Single Origin",
                Decimal::new(3200, 2),
                "Exotic Ethiopian highlands coffee with floral notes",
                "Ethiopia",
                Roast::Light,
            ),
            Product::new(
                "kenya-aa",
                "Kenya AA",
                Decimal::new(3000, 2),
                "Bold Kenyan coffee with wine-like acidity and berry notes",
                "Kenya",
                Roast::MediumDark,
            ),
        ])
    }

    /// Look up a product by 1-based index
    pub fn get(&self, index: usize) -> Option<&Product> {
        if index == 0 {
            return None;
        }
        self.products.get(index - 1)
    }

    /// Look up a product by id
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in display order
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_catalog_contents() {
        let catalog = Catalog::coffee();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(1).unwrap().id, "brazilian-blend");
        assert_eq!(catalog.get(4).unwrap().name, "Kenya AA");
        assert_eq!(catalog.get(2).unwrap().price, Decimal::new(2800, 2));
    }

    #[test]
    fn test_index_is_one_based() {
        let catalog = Catalog::coffee();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(5).is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::coffee();
        assert_eq!(
            catalog.by_id("ethiopian-single").unwrap().roast,
            Roast::Light
        );
        assert!(catalog.by_id("decaf").is_none());
    }
}
