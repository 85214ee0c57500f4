use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixture describing a product the scenarios search for and edit.
/// `expected_rows` is the table content a scenario compares against after
/// a save round-trips through the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub designation: String,
    pub quantity: i64,
    #[serde(default)]
    pub expected_rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    product_specs: Vec<ProductSpec>,
}

/// Built-in fixtures used when no override file is supplied.
pub fn default_product_specs() -> Vec<ProductSpec> {
    vec![
        ProductSpec {
            name: "Gear housing assembly".to_string(),
            designation: "SB-101.00.00".to_string(),
            quantity: 4,
            expected_rows: vec![
                "SB-101.00.00".to_string(),
                "Gear housing assembly".to_string(),
            ],
        },
        ProductSpec {
            name: "Drive shaft".to_string(),
            designation: "DT-210.10.01".to_string(),
            quantity: 12,
            expected_rows: vec!["DT-210.10.01".to_string(), "Drive shaft".to_string()],
        },
        ProductSpec {
            name: "Mounting bracket".to_string(),
            designation: "KR-033.02.00".to_string(),
            quantity: 40,
            expected_rows: vec!["KR-033.02.00".to_string(), "Mounting bracket".to_string()],
        },
    ]
}

pub fn product_specs_from_file(path: impl AsRef<Path>) -> Result<Vec<ProductSpec>> {
    let content = std::fs::read_to_string(path)?;
    let file: FixtureFile = toml::from_str(&content)?;
    Ok(file.product_specs)
}
