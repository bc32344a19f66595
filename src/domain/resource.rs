#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
