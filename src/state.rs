use std::collections::HashSet;
use std::sync::Arc;

use crate::agent::SuperLeeAgent;

pub struct AppState {
    pub agent: Arc<SuperLeeAgent>,
    pub admin_ids: HashSet<u64>,
}

impl AppState {
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
