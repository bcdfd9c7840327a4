use std::collections::HashMap;

use crate::chat::ChatSession;
use crate::core::AppConfig;

/// Server state shared across handlers. Sessions live in memory only;
/// nothing survives a restart.
pub struct AppState {
    pub sessions: HashMap<String, ChatSession>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }
}
