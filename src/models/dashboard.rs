use rust_decimal::Decimal;

/// Headline figures for the dashboard tab. These are fixed sample values and
/// do not follow the expense or income lists.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub greeting: String,
    pub subtitle: String,
    pub balance: Decimal,
    pub monthly_change_percent: Decimal,
    pub spending: Vec<MonthlySpending>,
    pub quick_actions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpending {
    pub month: &'static str,
    pub amount: u64,
}

impl DashboardSummary {
    pub fn spending_bars(&self) -> Vec<(&'static str, u64)> {
        self.spending.iter().map(|m| (m.month, m.amount)).collect()
    }

    pub fn peak_spending(&self) -> u64 {
        self.spending.iter().map(|m| m.amount).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sample_data;

    #[test]
    fn sample_series_covers_six_months() {
        let summary = sample_data::dashboard();
        let months: Vec<_> = summary.spending.iter().map(|m| m.month).collect();
        assert_eq!(months, ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"]);
        assert_eq!(summary.peak_spending(), 3800);
    }

    #[test]
    fn bars_follow_series_order() {
        let summary = sample_data::dashboard();
        assert_eq!(summary.spending_bars()[0], ("Jan", 3500));
        assert_eq!(summary.spending_bars()[5], ("Jun", 3400));
    }
}
