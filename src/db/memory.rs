use std::collections::HashMap;

use anyhow::Result;

use super::KeyValueStore;

/// In-memory store for exercising the session without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fail_writes: false,
        }
    }

    /// A store that reads `entries` but rejects every write.
    pub fn read_only(entries: &[(&str, &str)]) -> Self {
        Self {
            fail_writes: true,
            ..Self::with(entries)
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("disk full");
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("disk full");
        }
        self.values.remove(key);
        Ok(())
    }
}
