use super::assert::SoftAssertions;
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 表格快照：某一刻畫面上可見的列。場景在步驟間比較前後快照，
/// 而不是依賴模組層級的可變變數。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    pub rows: Vec<String>,
}

impl TableSnapshot {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.rows.iter().any(|row| row.contains(needle))
    }

    /// Rows present in `after` but not in this snapshot.
    pub fn added_rows(&self, after: &TableSnapshot) -> Vec<String> {
        after
            .rows
            .iter()
            .filter(|row| !self.rows.contains(row))
            .cloned()
            .collect()
    }
}

/// 單一場景的執行狀態。由 runner 在場景開始時建立，依序傳入每個步驟；
/// 場景結束即丟棄，場景之間不共享任何狀態。
pub struct ScenarioContext {
    pub scenario: String,
    pub artifacts_dir: PathBuf,
    pub soft: SoftAssertions,
    snapshots: HashMap<String, TableSnapshot>,
    values: HashMap<String, Value>,
}

impl ScenarioContext {
    pub fn new(scenario: &str, artifacts_root: &Path) -> Result<Self> {
        let artifacts_dir = artifacts_root.join(scenario);
        std::fs::create_dir_all(&artifacts_dir)?;
        Ok(Self {
            scenario: scenario.to_string(),
            artifacts_dir,
            soft: SoftAssertions::new(),
            snapshots: HashMap::new(),
            values: HashMap::new(),
        })
    }

    pub fn capture_snapshot(&mut self, name: &str, snapshot: TableSnapshot) {
        self.snapshots.insert(name.to_string(), snapshot);
    }

    pub fn snapshot(&self, name: &str) -> Option<&TableSnapshot> {
        self.snapshots.get(name)
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn value_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }

    pub fn value_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    pub fn value_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn snapshot_diff_reports_added_rows() {
        let before = TableSnapshot::new(vec!["a".to_string(), "b".to_string()]);
        let after = TableSnapshot::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(before.added_rows(&after), vec!["c".to_string()]);
        assert!(after.contains("c"));
    }

    #[test]
    fn context_threads_values_between_steps() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ScenarioContext::new("demo", tmp.path()).unwrap();

        ctx.set_value("search-rows", 3);
        ctx.set_value("already-present", false);

        assert_eq!(ctx.value_i64("search-rows"), Some(3));
        assert_eq!(ctx.value_bool("already-present"), Some(false));
        assert!(ctx.value("missing").is_none());
    }

    #[test]
    fn context_creates_artifacts_dir() {
        let tmp = TempDir::new().unwrap();
        let ctx = ScenarioContext::new("demo", tmp.path()).unwrap();
        assert!(ctx.artifacts_dir.exists());
        assert!(ctx.artifacts_dir.ends_with("demo"));
    }
}
