use serde::Deserialize;

/// Layout of the departments seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DepartmentSeedFile {
    pub departments: Vec<DepartmentSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentSeed {
    pub name: String,
    #[serde(default)]
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub departments_created: usize,
    pub positions_created: usize,
}
