use std::sync::Arc;

use padron::{auth::FixedSecret, remote::SupabaseStore};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub store: SupabaseStore,
    pub auth: FixedSecret,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let store = SupabaseStore::new(&config.supabase_url, &config.supabase_key)
            .expect("HTTP client misconfigured!");

        Arc::new(Self {
            config,
            store,
            auth: FixedSecret::default(),
        })
    }
}
