use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::domain::assignment::ResourceSheet;
use crate::domain::customer::CustomerRecord;
use crate::domain::resource::ResourceRecord;
use crate::services::assigner::AssignError;
use crate::services::config::{check_hours_divisor, ConfigError};
use crate::services::pool::{check_customers, PoolError};

/// Splits `total` slots across customers proportionally to their hours using
/// the largest-remainder method.
///
/// Every customer first gets the floor of its exact share. Leftover slots go
/// one each to the largest fractional parts, earlier customers first on ties.
/// The result always sums to `total`; customers with a tiny share may get zero.
pub fn apportion(
    customers: &[CustomerRecord],
    hours_divisor: f64,
    total: usize,
) -> Result<Vec<usize>, PoolError> {
    check_hours_divisor(hours_divisor)?;
    if total == 0 {
        return Err(PoolError::Config(ConfigError::InvalidMaxSamples));
    }
    check_customers(customers)?;

    let weights: Vec<f64> = customers
        .iter()
        .map(|customer| customer.hours as f64 / hours_divisor)
        .collect();
    let weight_sum: f64 = weights.iter().sum();
    let finite = weights.iter().all(|weight| weight.is_finite()) && weight_sum.is_finite();
    if !finite || weight_sum <= 0.0 {
        return Err(PoolError::UnusableWeights);
    }
    let exact: Vec<f64> = weights
        .iter()
        .map(|weight| weight / weight_sum * total as f64)
        .collect();

    let mut occurrences: Vec<usize> = exact.iter().map(|share| share.floor() as usize).collect();
    let assigned: usize = occurrences.iter().sum();
    let remaining = total.saturating_sub(assigned);

    let mut by_fraction: Vec<usize> = (0..customers.len()).collect();
    by_fraction.sort_by(|a, b| {
        let fraction_a = exact[*a] - exact[*a].floor();
        let fraction_b = exact[*b] - exact[*b].floor();
        fraction_b
            .partial_cmp(&fraction_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for index in by_fraction.into_iter().take(remaining) {
        occurrences[index] += 1;
    }

    debug!(total, ?occurrences, "apportioned slots");
    Ok(occurrences)
}

/// Customers repeated by their apportioned counts, contiguous and in input order.
pub fn expand(occurrences: &[usize]) -> Vec<usize> {
    occurrences
        .iter()
        .enumerate()
        .flat_map(|(index, count)| std::iter::repeat(index).take(*count))
        .collect()
}

/// One independently shuffled copy of `expanded` per resource.
///
/// Resource `i` shuffles with `StdRng::seed_from_u64(seed + i)` so every sheet
/// gets its own order while the whole workbook stays reproducible from `seed`.
pub fn shuffle_per_resource(
    expanded: &[usize],
    resources: &[ResourceRecord],
    seed: u64,
) -> Result<Vec<ResourceSheet>, AssignError> {
    if resources.is_empty() {
        return Err(AssignError::NoResources);
    }

    let sheets = resources
        .iter()
        .enumerate()
        .map(|(index, resource)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let mut entries = expanded.to_vec();
            entries.shuffle(&mut rng);
            ResourceSheet {
                resource: resource.name.clone(),
                entries,
            }
        })
        .collect();
    Ok(sheets)
}
