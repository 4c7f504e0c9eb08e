// src/state.rs
use std::sync::Arc;

use crate::services::database::DatabaseHandle;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default)]
pub struct AppState {
    pub database: DatabaseHandle,
}

impl AppState {
    pub fn new(database: DatabaseHandle) -> Self {
        Self { database }
    }
}
