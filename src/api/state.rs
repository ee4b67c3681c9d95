use std::collections::HashSet;
use std::sync::Arc;

use crate::clients::SlackApi;

/// Immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub slack: Arc<dyn SlackApi>,
    pub excluded_user_ids: Arc<HashSet<String>>,
}

impl AppState {
    pub fn new(slack: Arc<dyn SlackApi>, excluded_user_ids: HashSet<String>) -> Self {
        Self {
            slack,
            excluded_user_ids: Arc::new(excluded_user_ids),
        }
    }
}
