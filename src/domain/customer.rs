#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub name: String,
    pub hours: i64,
    pub userstory_id: i64,
}

impl CustomerRecord {
    pub fn new(name: impl Into<String>, hours: i64, userstory_id: i64) -> Self {
        Self {
            name: name.into(),
            hours,
            userstory_id,
        }
    }

    /// Text written to the `ceremony` column of a resource sheet.
    pub fn ceremony(&self, label: &str) -> String {
        format!("{}: {label}", self.userstory_id)
    }
}
