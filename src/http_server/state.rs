//! Shared handler state

use std::sync::Arc;

use crate::store::Database;

/// State shared by every resource router.
///
/// Holds only the connection factory; no connection or row data outlives a
/// request.
#[derive(Debug, Clone)]
pub struct ShopState {
    pub db: Database,
}

impl ShopState {
    pub fn new(db: Database) -> Arc<Self> {
        Arc::new(Self { db })
    }
}
