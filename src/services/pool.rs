use thiserror::Error;
use tracing::debug;

use crate::domain::customer::CustomerRecord;
use crate::services::config::{check_hours_divisor, ConfigError};

/// Upper bound on pool entries; a larger pool means the divisor is too small
/// for the hours in the sheet.
pub const MAX_POOL_SIZE: usize = 1 << 24;

#[derive(Error, Debug, PartialEq)]
pub enum PoolError {
    #[error("customers sheet is empty")]
    NoCustomers,
    #[error("customer '{customer}' has non-positive hours: {hours}")]
    NonPositiveHours { customer: String, hours: i64 },
    #[error("customer '{customer}' ({hours} hours) exceeds {} pool entries", MAX_POOL_SIZE)]
    TooManyRepetitions { customer: String, hours: i64 },
    #[error("weighted pool exceeds {} entries; raise the hours divisor", MAX_POOL_SIZE)]
    PoolTooLarge,
    #[error("customer weights are not finite numbers; pick another hours divisor")]
    UnusableWeights,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Customers expanded by their allocated hours.
///
/// `entries` holds indices into the customer slice the pool was built from,
/// in input order with each customer's copies contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPool {
    entries: Vec<usize>,
    repetitions: Vec<usize>,
}

impl WeightedPool {
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Copies per customer, aligned with the input slice.
    pub fn repetitions(&self) -> &[usize] {
        &self.repetitions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of pool copies for a customer: `hours / hours_divisor` rounded half
/// away from zero, never below one.
///
/// Returns `None` when the count is not finite or exceeds [`MAX_POOL_SIZE`].
pub fn repetition_count(hours: i64, hours_divisor: f64) -> Option<usize> {
    let copies = (hours as f64 / hours_divisor).round().max(1.0);
    if copies.is_finite() && copies <= MAX_POOL_SIZE as f64 {
        Some(copies as usize)
    } else {
        None
    }
}

pub fn build_pool(
    customers: &[CustomerRecord],
    hours_divisor: f64,
) -> Result<WeightedPool, PoolError> {
    check_hours_divisor(hours_divisor)?;
    check_customers(customers)?;

    let repetitions = customers
        .iter()
        .map(|customer| {
            repetition_count(customer.hours, hours_divisor).ok_or_else(|| {
                PoolError::TooManyRepetitions {
                    customer: customer.name.clone(),
                    hours: customer.hours,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let pool_size = repetitions
        .iter()
        .try_fold(0usize, |total, copies| total.checked_add(*copies))
        .filter(|size| *size <= MAX_POOL_SIZE)
        .ok_or(PoolError::PoolTooLarge)?;

    let mut entries = Vec::with_capacity(pool_size);
    for (index, copies) in repetitions.iter().enumerate() {
        entries.extend(std::iter::repeat(index).take(*copies));
    }

    debug!(
        customers = customers.len(),
        pool_size = entries.len(),
        hours_divisor,
        "built weighted pool"
    );
    Ok(WeightedPool {
        entries,
        repetitions,
    })
}

pub(crate) fn check_customers(customers: &[CustomerRecord]) -> Result<(), PoolError> {
    if customers.is_empty() {
        return Err(PoolError::NoCustomers);
    }
    if let Some(customer) = customers.iter().find(|customer| customer.hours <= 0) {
        return Err(PoolError::NonPositiveHours {
            customer: customer.name.clone(),
            hours: customer.hours,
        });
    }
    Ok(())
}
