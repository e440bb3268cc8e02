//! Read-only aggregates over the full transaction list.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::transaction::Transaction;

/// Totals computed from every stored transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct TransactionSummary {
    /// Sum of amounts whose type is exactly "income"
    pub total_income: f64,
    /// Sum of amounts of every non-income entry
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub net_balance: f64,
    /// Category label to summed amount, regardless of type
    pub by_category: BTreeMap<String, f64>,
    /// "YYYY-MM" to summed amount of "expense" entries
    pub monthly_expense: BTreeMap<String, f64>,
    /// Expense category with the largest positive total
    #[serde(default)]
    pub top_expense_category: Option<CategoryTotal>,
    /// Direction of the last two "expense" entries, in list order
    #[serde(default)]
    pub spending_trend: Option<SpendingTrend>,
    /// Present only when a monthly limit is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetStatus>,
}

/// A category label with its summed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTotal {
    #[schema(example = "rent")]
    pub category: String,
    #[schema(example = 1500.0)]
    pub amount: f64,
}

/// Whether the latest expense is larger than the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpendingTrend {
    Increasing,
    Decreasing,
}

/// Spending against a monthly limit for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetStatus {
    #[schema(example = "2024-01")]
    pub month: String,
    #[schema(example = 6000.0)]
    pub limit: f64,
    pub spent: f64,
    /// `spent - limit` when the limit is exceeded
    pub exceeded_by: Option<f64>,
}

/// Formats the `"YYYY-MM"` key used by [`TransactionSummary::monthly_expense`].
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

impl TransactionSummary {
    /// Aggregates `transactions`; `budget` is evaluated for the month of `today`.
    pub fn compute(transactions: &[Transaction], monthly_limit: Option<f64>, today: NaiveDate) -> Self {
        let mut summary = Self::default();
        // First-seen order, so equal totals resolve to the earliest category.
        let mut expense_by_category: Vec<(&str, f64)> = Vec::new();
        let mut expenses: Vec<f64> = Vec::new();

        for tx in transactions {
            if tx.is_income() {
                summary.total_income += tx.amount();
            } else {
                summary.total_expense += tx.amount();
            }

            *summary
                .by_category
                .entry(tx.category().to_string())
                .or_insert(0.0) += tx.amount();

            if tx.is_expense() {
                *summary
                    .monthly_expense
                    .entry(month_key(tx.date()))
                    .or_insert(0.0) += tx.amount();

                match expense_by_category
                    .iter_mut()
                    .find(|(category, _)| *category == tx.category())
                {
                    Some((_, total)) => *total += tx.amount(),
                    None => expense_by_category.push((tx.category(), tx.amount())),
                }
                expenses.push(tx.amount());
            }
        }

        summary.net_balance = summary.total_income - summary.total_expense;

        summary.top_expense_category = expense_by_category
            .into_iter()
            .fold(None, |best: Option<(&str, f64)>, (category, total)| {
                if total > best.map_or(0.0, |(_, amount)| amount) {
                    Some((category, total))
                } else {
                    best
                }
            })
            .map(|(category, amount)| CategoryTotal {
                category: category.to_string(),
                amount,
            });

        summary.spending_trend = match expenses.as_slice() {
            [.., previous, last] if last > previous => Some(SpendingTrend::Increasing),
            [.., _, _] => Some(SpendingTrend::Decreasing),
            _ => None,
        };

        summary.budget = monthly_limit.map(|limit| {
            let month = month_key(today);
            let spent = summary.monthly_expense.get(&month).copied().unwrap_or(0.0);
            BudgetStatus {
                month,
                limit,
                spent,
                exceeded_by: (spent > limit).then(|| spent - limit),
            }
        });

        summary
    }

    /// False when any total overflowed; such values have no JSON form.
    pub fn is_finite(&self) -> bool {
        let totals = [self.total_income, self.total_expense, self.net_balance];
        let top = self.top_expense_category.iter().map(|top| top.amount);
        let budget = self
            .budget
            .iter()
            .flat_map(|b| [Some(b.limit), Some(b.spent), b.exceeded_by])
            .flatten();

        totals
            .into_iter()
            .chain(self.by_category.values().copied())
            .chain(self.monthly_expense.values().copied())
            .chain(top)
            .chain(budget)
            .all(f64::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("income", "salary", 5000.0, date(2024, 1, 1), None),
            Transaction::new("expense", "food", 200.0, date(2024, 1, 5), None),
            Transaction::new("expense", "rent", 1500.0, date(2024, 2, 1), None),
            Transaction::new("expense", "food", 50.0, date(2024, 2, 10), None),
        ]
    }

    #[test]
    fn test_totals() {
        let summary = TransactionSummary::compute(&sample(), None, date(2024, 2, 15));

        assert_eq!(summary.total_income, 5000.0);
        assert_eq!(summary.total_expense, 1750.0);
        assert_eq!(summary.net_balance, 3250.0);
        assert!(summary.budget.is_none());
    }

    #[test]
    fn test_by_category_and_month() {
        let summary = TransactionSummary::compute(&sample(), None, date(2024, 2, 15));

        assert_eq!(summary.by_category["food"], 250.0);
        assert_eq!(summary.by_category["salary"], 5000.0);
        assert_eq!(
            summary.monthly_expense.keys().collect::<Vec<_>>(),
            vec!["2024-01", "2024-02"]
        );
        assert_eq!(summary.monthly_expense["2024-02"], 1550.0);
    }

    #[test]
    fn test_unknown_type_counts_as_expense_total_only() {
        let txs = vec![Transaction::new("refund", "misc", 10.0, date(2024, 3, 1), None)];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 3, 1));

        assert_eq!(summary.total_expense, 10.0);
        assert!(summary.monthly_expense.is_empty());
    }

    #[test]
    fn test_budget_exceeded() {
        let summary = TransactionSummary::compute(&sample(), Some(1000.0), date(2024, 2, 20));
        let budget = summary.budget.unwrap();

        assert_eq!(budget.month, "2024-02");
        assert_eq!(budget.spent, 1550.0);
        assert_eq!(budget.exceeded_by, Some(550.0));
    }

    #[test]
    fn test_budget_within_limit() {
        let summary = TransactionSummary::compute(&sample(), Some(6000.0), date(2024, 3, 1));
        let budget = summary.budget.unwrap();

        assert_eq!(budget.spent, 0.0);
        assert!(budget.exceeded_by.is_none());
    }

    #[test]
    fn test_empty() {
        let summary = TransactionSummary::compute(&[], None, date(2024, 1, 1));

        assert_eq!(summary, TransactionSummary::default());
    }

    #[test]
    fn test_top_expense_category_ignores_income() {
        let summary = TransactionSummary::compute(&sample(), None, date(2024, 2, 15));

        assert_eq!(
            summary.top_expense_category,
            Some(CategoryTotal {
                category: "rent".to_string(),
                amount: 1500.0,
            })
        );
    }

    #[test]
    fn test_top_expense_category_tie_keeps_first_seen() {
        let txs = vec![
            Transaction::new("expense", "travel", 80.0, date(2024, 1, 1), None),
            Transaction::new("expense", "books", 80.0, date(2024, 1, 2), None),
        ];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 1, 2));

        assert_eq!(summary.top_expense_category.unwrap().category, "travel");
    }

    #[test]
    fn test_top_expense_category_requires_positive_total() {
        let txs = vec![Transaction::new("expense", "refund", -20.0, date(2024, 1, 1), None)];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 1, 1));

        assert!(summary.top_expense_category.is_none());
    }

    #[test]
    fn test_spending_trend() {
        let summary = TransactionSummary::compute(&sample(), None, date(2024, 2, 15));
        assert_eq!(summary.spending_trend, Some(SpendingTrend::Decreasing));

        let mut txs = sample();
        txs.push(Transaction::new("expense", "fuel", 60.0, date(2024, 2, 12), None));
        let summary = TransactionSummary::compute(&txs, None, date(2024, 2, 15));
        assert_eq!(summary.spending_trend, Some(SpendingTrend::Increasing));
    }

    #[test]
    fn test_spending_trend_equal_amounts_is_decreasing() {
        let txs = vec![
            Transaction::new("expense", "food", 10.0, date(2024, 1, 1), None),
            Transaction::new("income", "salary", 900.0, date(2024, 1, 2), None),
            Transaction::new("expense", "food", 10.0, date(2024, 1, 3), None),
        ];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 1, 3));

        assert_eq!(summary.spending_trend, Some(SpendingTrend::Decreasing));
    }

    #[test]
    fn test_single_expense_has_no_trend() {
        let txs = vec![Transaction::new("expense", "food", 10.0, date(2024, 1, 1), None)];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 1, 1));

        assert!(summary.spending_trend.is_none());
        assert_eq!(summary.top_expense_category.unwrap().amount, 10.0);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        let summary = TransactionSummary::compute(&sample(), None, date(2024, 2, 15));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["spending_trend"], "decreasing");
        assert_eq!(json["top_expense_category"]["category"], "rent");
    }

    #[test]
    fn test_overflowing_totals_are_not_finite() {
        let txs = vec![
            Transaction::new("income", "x", 1e308, date(2024, 1, 1), None),
            Transaction::new("income", "x", 1e308, date(2024, 1, 2), None),
        ];

        let summary = TransactionSummary::compute(&txs, None, date(2024, 1, 2));

        assert!(!summary.is_finite());
        assert!(TransactionSummary::compute(&sample(), Some(1.0), date(2024, 2, 1)).is_finite());
    }
}
