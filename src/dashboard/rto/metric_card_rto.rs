use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCardRto {
  pub title: &'static str,
  pub value: String,
  pub change: &'static str,
  pub trend: Trend,
}
