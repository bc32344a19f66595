use thiserror::Error;

use crate::domain::assignment::AssignmentRow;
use crate::domain::customer::CustomerRecord;
use crate::domain::resource::ResourceRecord;

#[derive(Error, Debug, PartialEq)]
pub enum AssignError {
    #[error("resources sheet is empty")]
    NoResources,
}

/// Pairs every sampled customer with a resource in strict rotation:
/// row `i` goes to `resources[i % resources.len()]`.
///
/// `sample` holds indices into `customers`.
pub fn assign_resources(
    sample: &[usize],
    customers: &[CustomerRecord],
    resources: &[ResourceRecord],
) -> Result<Vec<AssignmentRow>, AssignError> {
    if resources.is_empty() {
        return Err(AssignError::NoResources);
    }

    let rows = sample
        .iter()
        .zip(resources.iter().cycle())
        .map(|(customer_index, resource)| {
            let customer = &customers[*customer_index];
            AssignmentRow {
                customer: customer.name.clone(),
                userstory_id: customer.userstory_id,
                resource: resource.name.clone(),
            }
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{customers, resources};

    #[test]
    fn assign_resources_rotates_through_resources_in_order() {
        let customers = customers(&[("A", 30, 100), ("B", 15, 200)]);
        let resources = resources(&["R1", "R2", "R3"]);
        let sample = vec![1, 0, 0, 1, 0];

        let rows = assign_resources(&sample, &customers, &resources).unwrap();

        let assigned: Vec<&str> = rows.iter().map(|row| row.resource.as_str()).collect();
        assert_eq!(assigned, vec!["R1", "R2", "R3", "R1", "R2"]);
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.resource, resources[index % resources.len()].name);
        }
    }

    #[test]
    fn assign_resources_keeps_sample_order_and_customer_fields() {
        let customers = customers(&[("A", 30, 100), ("B", 15, 200)]);
        let resources = resources(&["R1"]);

        let rows = assign_resources(&[1, 0], &customers, &resources).unwrap();

        assert_eq!(
            rows,
            vec![
                AssignmentRow {
                    customer: "B".to_string(),
                    userstory_id: 200,
                    resource: "R1".to_string(),
                },
                AssignmentRow {
                    customer: "A".to_string(),
                    userstory_id: 100,
                    resource: "R1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn assign_resources_rejects_empty_resources() {
        let customers = customers(&[("A", 30, 100)]);
        assert_eq!(
            assign_resources(&[0], &customers, &[]),
            Err(AssignError::NoResources)
        );
    }
}
