//! Static per-model price table.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// USD price per one million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelPrice {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPrice {
    pub const FREE: ModelPrice = ModelPrice {
        input_per_million: 0.0,
        output_per_million: 0.0,
    };

    pub fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }

    /// Cost of one call with the given token counts.
    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1_000_000.0) * self.input_per_million
            + (output_tokens as f64 / 1_000_000.0) * self.output_per_million
    }
}

/// Model id → price lookup. Unknown models are free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, ModelPrice>,
}

impl PriceTable {
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    pub fn with_price(mut self, model: impl AsRef<str>, price: ModelPrice) -> Self {
        self.insert(model, price);
        self
    }

    pub fn insert(&mut self, model: impl AsRef<str>, price: ModelPrice) {
        self.prices.insert(model.as_ref().to_string(), price);
    }

    /// Overlay `other` on top of this table; entries in `other` win.
    pub fn merge(mut self, other: PriceTable) -> Self {
        self.prices.extend(other.prices);
        self
    }

    pub fn price_of(&self, model: &str) -> ModelPrice {
        self.prices.get(model).copied().unwrap_or(ModelPrice::FREE)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.prices.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceTable {
    /// Hosted prices as of November 2024.
    fn default() -> Self {
        Self::empty()
            .with_price(Model::Gpt4o.as_str(), ModelPrice::new(2.50, 10.00))
            .with_price(Model::O1Mini.as_str(), ModelPrice::new(3.00, 12.00))
            .with_price(Model::Gpt4oMini.as_str(), ModelPrice::new(0.150, 0.600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = PriceTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(table.price_of("gpt-4o"), ModelPrice::new(2.50, 10.00));
        assert_eq!(table.price_of("gpt-4o-mini"), ModelPrice::new(0.15, 0.60));
    }

    #[test]
    fn test_unknown_model_is_free() {
        let table = PriceTable::default();
        assert_eq!(table.price_of("llama3.2:1b"), ModelPrice::FREE);
        assert!(!table.contains("llama3.2:1b"));
    }

    #[test]
    fn test_cost_formula() {
        let price = ModelPrice::new(2.50, 10.00);
        let cost = price.cost(1_000, 500);
        assert!((cost - (0.0025 + 0.005)).abs() < 1e-12);
    }

    #[test]
    fn test_merge_overrides() {
        let overrides = PriceTable::empty()
            .with_price("gpt-4o", ModelPrice::new(5.0, 15.0))
            .with_price("my-model", ModelPrice::new(1.0, 1.0));
        let table = PriceTable::default().merge(overrides);
        assert_eq!(table.price_of("gpt-4o"), ModelPrice::new(5.0, 15.0));
        assert_eq!(table.price_of("o1-mini"), ModelPrice::new(3.0, 12.0));
        assert!(table.contains("my-model"));
    }
}
