use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::domain::assignment::{AssignmentRow, ResourceSheet};
use crate::domain::customer::CustomerRecord;
use crate::domain::resource::ResourceRecord;
use crate::services::apportion::{apportion, expand, shuffle_per_resource};
use crate::services::assigner::{assign_resources, AssignError};
use crate::services::config::{ConfigError, SamplerConfig};
use crate::services::pool::{build_pool, PoolError};
use crate::services::report_types::{CustomerShare, RotationReport};
use crate::services::sampler::{draw_sample, SampleError};
use crate::services::workbook_reader::{read_rotation_input, RotationInput, WorkbookReadError};
use crate::services::workbook_writer::{
    write_assignment_workbook, write_resource_workbook, WorkbookWriteError,
};

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Read(#[from] WorkbookReadError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Assign(#[from] AssignError),
    #[error("failed to write output workbook {path}: {source}")]
    Write {
        path: PathBuf,
        source: WorkbookWriteError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Schema,
    Validation,
    EmptyPool,
    Io,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Schema => 2,
            ErrorKind::Validation => 3,
            ErrorKind::EmptyPool => 4,
            ErrorKind::Io => 5,
        }
    }
}

impl RotationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotationError::Read(err) if err.is_schema_error() => ErrorKind::Schema,
            RotationError::Read(err) if err.is_io_error() => ErrorKind::Io,
            RotationError::Sample(SampleError::EmptyPool) => ErrorKind::EmptyPool,
            RotationError::Write { .. } => ErrorKind::Io,
            _ => ErrorKind::Validation,
        }
    }
}

/// Sampled rows together with the intermediate pool, kept for reporting.
#[derive(Debug, Clone)]
pub struct Assignments {
    pub rows: Vec<AssignmentRow>,
    pub repetitions: Vec<usize>,
    pub sample: Vec<usize>,
}

/// Builds the weighted pool, draws the capped sample and rotates resources
/// over it. Everything is validated before the first draw.
pub fn build_assignments<R: Rng + ?Sized>(
    customers: &[CustomerRecord],
    resources: &[ResourceRecord],
    config: &SamplerConfig,
    rng: &mut R,
) -> Result<Assignments, RotationError> {
    config.validate()?;
    if resources.is_empty() {
        return Err(AssignError::NoResources.into());
    }

    let pool = build_pool(customers, config.hours_divisor)?;
    let sample = draw_sample(pool.entries(), config.max_samples, rng)?;
    let rows = assign_resources(&sample, customers, resources)?;
    Ok(Assignments {
        rows,
        repetitions: pool.repetitions().to_vec(),
        sample,
    })
}

/// Apportions `max_samples` slots by hours and gives every resource its own
/// shuffle of the expanded list.
pub fn build_resource_sheets(
    customers: &[CustomerRecord],
    resources: &[ResourceRecord],
    config: &SamplerConfig,
    seed: u64,
) -> Result<(Vec<usize>, Vec<ResourceSheet>), RotationError> {
    config.validate()?;
    if resources.is_empty() {
        return Err(AssignError::NoResources.into());
    }

    let occurrences = apportion(customers, config.hours_divisor, config.max_samples)?;
    let expanded = expand(&occurrences);
    if expanded.is_empty() {
        return Err(SampleError::EmptyPool.into());
    }
    let sheets = shuffle_per_resource(&expanded, resources, seed)?;
    Ok((occurrences, sheets))
}

/// Reads `input`, writes the `assignments` workbook to `output` and returns
/// the run report. Nothing is written unless every step before it succeeded.
pub fn assign_from_workbook(
    input: &Path,
    output: &Path,
    config: &SamplerConfig,
) -> Result<RotationReport, RotationError> {
    config.validate()?;
    let RotationInput {
        customers,
        resources,
    } = read_rotation_input(input)?;

    let seed = config.resolve_seed();
    info!(seed, "sampling assignments");
    let mut rng = StdRng::seed_from_u64(seed);
    let assignments = build_assignments(&customers, &resources, config, &mut rng)?;

    write_assignment_workbook(output, &assignments.rows).map_err(|source| {
        RotationError::Write {
            path: output.to_path_buf(),
            source,
        }
    })?;

    let drawn = count_drawn(&assignments.sample, customers.len());
    Ok(RotationReport {
        data_source: data_source_name(input),
        output: output.display().to_string(),
        generated_on: today(),
        seed,
        max_samples: config.max_samples,
        hours_divisor: config.hours_divisor,
        pool_size: assignments.repetitions.iter().sum(),
        rows: assignments.rows.len(),
        resources: resources.len(),
        customers: customer_shares(&customers, &assignments.repetitions, &drawn),
    })
}

/// Reads `input` and writes a workbook with one shuffled sheet per resource.
pub fn sheets_from_workbook(
    input: &Path,
    output: &Path,
    config: &SamplerConfig,
    ceremony_label: &str,
) -> Result<RotationReport, RotationError> {
    config.validate()?;
    let RotationInput {
        customers,
        resources,
    } = read_rotation_input(input)?;

    let seed = config.resolve_seed();
    info!(seed, "shuffling resource sheets");
    let (occurrences, sheets) = build_resource_sheets(&customers, &resources, config, seed)?;

    write_resource_workbook(output, &sheets, &customers, ceremony_label).map_err(|source| {
        RotationError::Write {
            path: output.to_path_buf(),
            source,
        }
    })?;

    let rows = occurrences.iter().sum();
    Ok(RotationReport {
        data_source: data_source_name(input),
        output: output.display().to_string(),
        generated_on: today(),
        seed,
        max_samples: config.max_samples,
        hours_divisor: config.hours_divisor,
        pool_size: rows,
        rows,
        resources: sheets.len(),
        customers: customer_shares(&customers, &occurrences, &occurrences),
    })
}

fn count_drawn(sample: &[usize], customer_count: usize) -> Vec<usize> {
    let mut drawn = vec![0; customer_count];
    for index in sample {
        drawn[*index] += 1;
    }
    drawn
}

fn customer_shares(
    customers: &[CustomerRecord],
    repetitions: &[usize],
    drawn: &[usize],
) -> Vec<CustomerShare> {
    customers
        .iter()
        .zip(repetitions.iter().zip(drawn))
        .map(|(customer, (repetitions, drawn))| CustomerShare {
            customer: customer.name.clone(),
            userstory_id: customer.userstory_id,
            hours: customer.hours,
            repetitions: *repetitions,
            drawn: *drawn,
        })
        .collect()
}

fn data_source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
