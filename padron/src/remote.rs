//! # Remote row store
//!
//! All persistence is one hosted Postgres table reached through its REST
//! layer (Supabase/PostgREST). Exactly two calls exist:
//!
//! - insert one row (`POST /rest/v1/registrations`, `Prefer: return=minimal`)
//! - select everything newest-first
//!   (`GET /rest/v1/registrations?select=*&order=created_at.desc`)
//!
//! Each call is a single best-effort round trip. No retries, no caching,
//! no pagination; the user is the retry mechanism. Ordering, id and
//! `created_at` assignment, and consistency are all the store's problem.
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{NewRegistration, Registration};

const TABLE: &str = "registrations";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error de red: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("La base de datos rechazó la operación (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// PostgREST error body; `message` is the part worth surfacing.
#[derive(Deserialize)]
struct RejectionBody {
    message: String,
}

/// The two remote calls every surface goes through.
#[allow(async_fn_in_trait)]
pub trait RegistrationStore {
    /// Inserts one row. The store assigns `id` and `created_at`; on any
    /// non-success response nothing may be assumed inserted.
    async fn insert(&self, row: &NewRegistration) -> Result<(), StoreError>;

    /// All rows, newest first. Zero rows is an empty list, not an error.
    async fn list_all(&self) -> Result<Vec<Registration>, StoreError>;
}

pub struct SupabaseStore {
    client: Client,
    table_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE),
            api_key: api_key.to_string(),
        })
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn rejection(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<RejectionBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        StoreError::Rejected { status, message }
    }
}

impl RegistrationStore for SupabaseStore {
    async fn insert(&self, row: &NewRegistration) -> Result<(), StoreError> {
        let response = self
            .request(self.client.post(&self.table_url))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Registration>, StoreError> {
        let response = self
            .request(self.client.get(&self.table_url))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }
}
