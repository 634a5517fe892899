use anyhow::{anyhow, Result};

use async_trait::async_trait;

use interface::DatabaseHandle;

pub enum MockDatabase {
    Uninitialized,
    Working {
        name: Option<String>,
        collections: Vec<String>,
    },
    Failing(String),
    Panicking,
}

#[async_trait]
impl DatabaseHandle for MockDatabase {
    fn is_available(&self) -> bool {
        !matches!(self, MockDatabase::Uninitialized)
    }

    fn name(&self) -> Option<String> {
        match self {
            MockDatabase::Working { name, .. } => name.clone(),
            _ => None,
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        match self {
            MockDatabase::Working { collections, .. } => Ok(collections.clone()),
            MockDatabase::Failing(e) => Err(anyhow!("{}", e)),
            MockDatabase::Panicking => panic!("driver state corrupted"),
            MockDatabase::Uninitialized => Ok(Vec::new()),
        }
    }
}
