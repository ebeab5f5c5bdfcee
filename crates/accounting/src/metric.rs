use serde::{Deserialize, Serialize};

/// One month of top-line figures.
///
/// `profit` is always exactly `revenue - expenses`; it is derived on
/// construction and on deserialization, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FinanceMetricRecord")]
pub struct FinanceMetric {
    month: String,
    revenue: u64,
    expenses: u64,
    profit: i64,
}

#[derive(Deserialize)]
struct FinanceMetricRecord {
    month: String,
    revenue: u64,
    expenses: u64,
}

impl From<FinanceMetricRecord> for FinanceMetric {
    fn from(r: FinanceMetricRecord) -> Self {
        Self::new(r.month, r.revenue, r.expenses)
    }
}

impl FinanceMetric {
    pub fn new(month: impl Into<String>, revenue: u64, expenses: u64) -> Self {
        let profit = (i128::from(revenue) - i128::from(expenses))
            .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Self {
            month: month.into(),
            revenue,
            expenses,
            profit,
        }
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub fn expenses(&self) -> u64 {
        self.expenses
    }

    pub fn profit(&self) -> i64 {
        self.profit
    }
}

/// Totals over a finance series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_revenue: u64,
    pub total_expenses: u64,
    pub total_profit: i64,
    /// Most profitable month (earliest wins ties); `None` for an empty series.
    pub best_month: Option<String>,
}

pub fn summarize_finance(series: &[FinanceMetric]) -> FinanceSummary {
    let total_revenue = series.iter().map(|m| m.revenue).fold(0u64, u64::saturating_add);
    let total_expenses = series.iter().map(|m| m.expenses).fold(0u64, u64::saturating_add);
    let total_profit = series.iter().map(|m| m.profit).fold(0i64, i64::saturating_add);

    let mut best: Option<&FinanceMetric> = None;
    for m in series {
        if best.is_none_or(|b| m.profit > b.profit) {
            best = Some(m);
        }
    }

    FinanceSummary {
        total_revenue,
        total_expenses,
        total_profit,
        best_month: best.map(|m| m.month.clone()),
    }
}
