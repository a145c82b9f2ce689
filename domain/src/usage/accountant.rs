//! Token and cost bookkeeping for a run.

use super::pricing::PriceTable;
use serde::{Deserialize, Serialize};

/// Usage of one successful provider call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost: f64,
}

/// Running totals across a run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_cost: f64,
}

impl UsageSummary {
    pub fn total_tokens(&self) -> u64 {
        self.total_input_tokens + self.total_output_tokens
    }
}

/// Accumulates [`UsageRecord`]s and their running totals.
///
/// Records are never modified once added, and the totals only grow.
#[derive(Debug, Clone, Default)]
pub struct UsageAccountant {
    prices: PriceTable,
    records: Vec<UsageRecord>,
    summary: UsageSummary,
}

impl UsageAccountant {
    pub fn new(prices: PriceTable) -> Self {
        Self {
            prices,
            records: Vec::new(),
            summary: UsageSummary::default(),
        }
    }

    /// Record one call and return its cost.
    pub fn record(&mut self, model: &str, input_tokens: u64, output_tokens: u64) -> f64 {
        let cost = self.prices.price_of(model).cost(input_tokens, output_tokens);

        self.records.push(UsageRecord {
            model: model.to_string(),
            input_tokens,
            output_tokens,
            cost,
        });

        self.summary.total_input_tokens += input_tokens;
        self.summary.total_output_tokens += output_tokens;
        self.summary.total_cost += cost;

        cost
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&UsageRecord> {
        self.records.last()
    }

    pub fn summary(&self) -> UsageSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::pricing::ModelPrice;

    #[test]
    fn test_two_calls_sum() {
        let mut acc = UsageAccountant::new(PriceTable::default());
        let a = acc.record("gpt-4o", 1_200, 150);
        let b = acc.record("gpt-4o", 2_400, 90);

        let expected_a = ModelPrice::new(2.50, 10.00).cost(1_200, 150);
        let expected_b = ModelPrice::new(2.50, 10.00).cost(2_400, 90);
        assert!((a - expected_a).abs() < 1e-12);
        assert!((b - expected_b).abs() < 1e-12);

        let summary = acc.summary();
        assert!((summary.total_cost - (a + b)).abs() < 1e-12);
        assert_eq!(summary.total_input_tokens, 3_600);
        assert_eq!(summary.total_output_tokens, 240);
        assert_eq!(summary.total_tokens(), 3_840);
        assert_eq!(acc.records().len(), 2);
    }

    #[test]
    fn test_unknown_model_costs_nothing() {
        let mut acc = UsageAccountant::new(PriceTable::default());
        let cost = acc.record("llama3.2:latest", 500, 500);
        assert_eq!(cost, 0.0);
        assert_eq!(acc.summary().total_cost, 0.0);
        assert_eq!(acc.summary().total_tokens(), 1_000);
        assert_eq!(acc.last().unwrap().model, "llama3.2:latest");
    }

    #[test]
    fn test_totals_never_decrease() {
        let mut acc = UsageAccountant::new(PriceTable::default());
        let mut previous = acc.summary();
        for (model, i, o) in [("gpt-4o-mini", 10, 5), ("unknown", 0, 0), ("o1-mini", 7, 3)] {
            acc.record(model, i, o);
            let now = acc.summary();
            assert!(now.total_cost >= previous.total_cost);
            assert!(now.total_tokens() >= previous.total_tokens());
            previous = now;
        }
    }
}
