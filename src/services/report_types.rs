use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CustomerShare {
    pub customer: String,
    pub userstory_id: i64,
    pub hours: i64,
    /// Copies of the customer in the pool (or apportioned slots per sheet).
    pub repetitions: usize,
    /// Rows the customer ended up in, per output sheet.
    pub drawn: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RotationReport {
    pub data_source: String,
    pub output: String,
    pub generated_on: NaiveDate,
    pub seed: u64,
    pub max_samples: usize,
    pub hours_divisor: f64,
    pub pool_size: usize,
    pub rows: usize,
    pub resources: usize,
    pub customers: Vec<CustomerShare>,
}
