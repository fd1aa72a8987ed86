use serde::Serialize;

use super::rto::metric_card_rto::{MetricCardRto, Trend};

pub const FALLBACK_MONTHLY_USERS: u64 = 1720;
pub const REVENUE_PER_USER: u64 = 85;
pub const CHURN_RATE: f64 = 3.2;
pub const CURRENCY_SYMBOL: &str = "₦";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
  pub month: &'static str,
  pub users: u64,
  pub revenue: u64,
}

pub const CHART_DATA: [ChartPoint; 6] = [
  ChartPoint {
    month: "Jan",
    users: 1200,
    revenue: 85000,
  },
  ChartPoint {
    month: "Feb",
    users: 1350,
    revenue: 92000,
  },
  ChartPoint {
    month: "Mar",
    users: 1240,
    revenue: 81000,
  },
  ChartPoint {
    month: "Apr",
    users: 1430,
    revenue: 105000,
  },
  ChartPoint {
    month: "May",
    users: 1620,
    revenue: 128000,
  },
  ChartPoint {
    month: "Jun",
    users: 1720,
    revenue: 142000,
  },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardMetrics {
  pub monthly_users: u64,
  pub revenue: u64,
  pub churn_rate: f64,
}

impl DashboardMetrics {
  /// Zero fetched users (including a failed fetch) falls back to the last
  /// month of the mock series.
  pub fn derive(api_user_count: usize) -> Self {
    let monthly_users = match api_user_count as u64 {
      0 => FALLBACK_MONTHLY_USERS,
      count => count,
    };
    Self {
      monthly_users,
      revenue: monthly_users * REVENUE_PER_USER,
      churn_rate: CHURN_RATE,
    }
  }

  pub fn cards(&self) -> Vec<MetricCardRto> {
    vec![
      MetricCardRto {
        title: "Total Users",
        value: format_thousands(self.monthly_users),
        change: "+12.5%",
        trend: Trend::Up,
      },
      MetricCardRto {
        title: "Monthly Revenue",
        value: format!(
          "{}{}",
          CURRENCY_SYMBOL,
          format_thousands(self.revenue)
        ),
        change: "+8.3%",
        trend: Trend::Up,
      },
      MetricCardRto {
        title: "Churn Rate",
        value: format!("{}%", self.churn_rate),
        change: "-0.8%",
        trend: Trend::Down,
      },
    ]
  }
}

pub fn format_thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
  for (index, digit) in digits.chars().enumerate() {
    if index > 0 && (digits.len() - index) % 3 == 0 {
      formatted.push(',');
    }
    formatted.push(digit);
  }
  formatted
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fallback_when_no_users_fetched() {
    let metrics = DashboardMetrics::derive(0);
    assert_eq!(metrics.monthly_users, 1720);
    assert_eq!(metrics.revenue, 146_200);
  }

  #[test]
  fn test_metrics_follow_fetched_count() {
    let metrics = DashboardMetrics::derive(5);
    assert_eq!(metrics.monthly_users, 5);
    assert_eq!(metrics.revenue, 425);
  }

  #[test]
  fn test_cards() {
    let cards = DashboardMetrics::derive(0).cards();
    assert_eq!(cards[0].value, "1,720");
    assert_eq!(cards[1].value, "₦146,200");
    assert_eq!(cards[2].value, "3.2%");
    assert_eq!(cards[2].trend, Trend::Down);
  }

  #[test]
  fn test_format_thousands() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234567), "1,234,567");
  }
}
