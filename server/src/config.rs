use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "2000"),
            supabase_url: try_load("SUPABASE_URL", "http://localhost:54321"),
            supabase_key: load_secret("SUPABASE_SERVICE_KEY"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Secrets come from the environment in development and from a mounted
/// docker secret in deployment.
fn load_secret(name: &str) -> String {
    if let Ok(value) = env::var(name) {
        return value.trim().to_string();
    }

    let path = format!("/run/secrets/{name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {name} from {path}: {e}");
        })
        .expect("Secrets misconfigured!")
}
