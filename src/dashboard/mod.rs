pub mod directory;
pub mod metrics;
pub mod rto;

use serde::Serialize;
use tracing::warn;

use crate::shared::model::user::UserRecord;
use directory::{ApiUser, UserDirectory};
use metrics::{ChartPoint, DashboardMetrics, CHART_DATA};
use rto::metric_card_rto::MetricCardRto;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRto {
  pub greeting: String,
  pub metrics: Vec<MetricCardRto>,
  pub chart: Vec<ChartPoint>,
  pub api_users: Vec<ApiUser>,
}

/// Builds the dashboard for the session user. Without a directory, or when
/// the fetch fails, the demo user list is empty and the mock figures apply.
pub async fn load_dashboard(
  user: &UserRecord,
  directory: Option<&dyn UserDirectory>,
  limit: u32,
) -> DashboardRto {
  let api_users = match directory {
    Some(directory) => match directory.fetch_users(limit).await {
      Ok(users) => users,
      Err(error) => {
        warn!(%error, "demo users unavailable");
        Vec::new()
      }
    },
    None => Vec::new(),
  };
  let metrics = DashboardMetrics::derive(api_users.len());

  DashboardRto {
    greeting: format!("Welcome back, {}", user.name),
    metrics: metrics.cards(),
    chart: CHART_DATA.to_vec(),
    api_users,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use directory::{DirectoryError, MockUserDirectory};

  fn user() -> UserRecord {
    UserRecord {
      name: String::from("Ada"),
      email: String::from("ada@example.com"),
      password: String::from("pw1234"),
      role: String::new(),
      phone: String::new(),
    }
  }

  #[actix_rt::test]
  async fn test_dashboard_with_fetched_users() {
    let mut directory = MockUserDirectory::new();
    directory
      .expect_fetch_users()
      .withf(|limit| *limit == 2)
      .returning(|_| {
        Ok(vec![
          ApiUser {
            id: 1,
            first_name: String::from("Emily"),
            last_name: String::from("Johnson"),
            email: String::from("emily@x.com"),
            age: 28,
          },
          ApiUser {
            id: 2,
            first_name: String::from("Michael"),
            last_name: String::from("Williams"),
            email: String::from("michael@x.com"),
            age: 35,
          },
        ])
      });

    let dashboard = load_dashboard(&user(), Some(&directory), 2).await;

    assert_eq!(dashboard.greeting, "Welcome back, Ada");
    assert_eq!(dashboard.api_users.len(), 2);
    assert_eq!(dashboard.metrics[0].value, "2");
    assert_eq!(dashboard.metrics[1].value, "₦170");
    assert_eq!(dashboard.chart.len(), 6);
  }

  #[actix_rt::test]
  async fn test_dashboard_degrades_when_directory_fails() {
    let mut directory = MockUserDirectory::new();
    directory.expect_fetch_users().returning(|_| {
      let error = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
      Err(DirectoryError::Request(error))
    });

    let dashboard = load_dashboard(&user(), Some(&directory), 5).await;

    assert!(dashboard.api_users.is_empty());
    assert_eq!(dashboard.metrics[0].value, "1,720");
  }

  #[actix_rt::test]
  async fn test_offline_dashboard_uses_mock_figures() {
    let dashboard = load_dashboard(&user(), None, 5).await;

    assert!(dashboard.api_users.is_empty());
    assert_eq!(dashboard.metrics[1].value, "₦146,200");
  }
}
