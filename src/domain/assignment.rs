use serde::Serialize;

/// One row of the `assignments` sheet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub customer: String,
    pub userstory_id: i64,
    pub resource: String,
}

/// Shuffled customer list for a single resource. `entries` index into the
/// customer sequence the sheet was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSheet {
    pub resource: String,
    pub entries: Vec<usize>,
}
