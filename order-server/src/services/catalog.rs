//! Catalog Provider
//!
//! The immutable list of sellable products with their size/price variants.
//! Ships bundled in code; `CATALOG_PATH` can point at a JSON file with the
//! same shape to override it without a rebuild. The order flow only ever
//! reads from here: unit prices on submitted lines are resolved through
//! [`Catalog::find_variant`], never taken from the request.

use shared::models::{Product, ProductVariant};

use crate::utils::AppError;

/// In-memory product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load from a JSON file when configured, otherwise the bundled list
    pub fn load(catalog_path: Option<&str>) -> Result<Self, AppError> {
        match catalog_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::bundled()),
        }
    }

    /// Read a JSON product list from disk
    pub fn from_file(path: &str) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::internal(format!("read catalog {path}: {e}")))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .map_err(|e| AppError::internal(format!("parse catalog {path}: {e}")))?;
        tracing::info!(count = products.len(), path = %path, "Catalog loaded from file");
        Ok(Self { products })
    }

    /// The bundled Casina Farms product list
    pub fn bundled() -> Self {
        let product = |id: &str, name: &str, category: &str, variants: &[(&str, i64)]| Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            variants: variants
                .iter()
                .map(|(size, unit_price)| ProductVariant {
                    size: (*size).into(),
                    unit_price: *unit_price,
                })
                .collect(),
        };

        Self {
            products: vec![
                product(
                    "mangrove-honey",
                    "Mangrove Honey",
                    "Honey",
                    &[("380g", 500), ("660g", 1000), ("1kg", 1500)],
                ),
                product(
                    "terrestrial-honey",
                    "Terrestrial Honey",
                    "Honey",
                    &[("380g", 400), ("660g", 700), ("1kg", 1000)],
                ),
                product(
                    "hibiscus-petals",
                    "Hibiscus Dried Petals",
                    "Natural Products",
                    &[("100g", 550)],
                ),
                product(
                    "seaweed-shampoo",
                    "Seaweed Shampoo",
                    "Seaweed Products",
                    &[("300ml", 400)],
                ),
                product(
                    "seaweed-hair-food",
                    "Seaweed Hair Food",
                    "Seaweed Products",
                    &[("250ml", 300)],
                ),
                product(
                    "seaweed-shower-gel",
                    "Seaweed Shower Gel",
                    "Seaweed Products",
                    &[("300ml", 400)],
                ),
                product(
                    "seaweed-body-lotion",
                    "Seaweed Body Lotion",
                    "Seaweed Products",
                    &[("250ml", 350)],
                ),
                product(
                    "seaweed-bar-soap",
                    "Seaweed Bar Soap",
                    "Seaweed Products",
                    &[("100g", 250)],
                ),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Resolve a (product, size) pair to its catalog entry
    pub fn find_variant(&self, product_id: &str, size: &str) -> Option<(&Product, &ProductVariant)> {
        let product = self.products.iter().find(|p| p.id == product_id)?;
        let variant = product.variant(size)?;
        Some((product, variant))
    }
}
