//! # Padrón
//!
//! Shared domain for the electoral registration system.
//!
//! Everything both surfaces (the operator CLI and the HTTP boundary) need
//! lives here: the registration row model, the field validation rules, the
//! remote row store client, the dashboard statistics, and the admin
//! capability check.
//!
//! ## Persistence
//!
//! There is no storage engine in this repository. Rows live in one hosted
//! Postgres table reached through its REST layer; see [`remote`] for the
//! two calls that exist. Rows are immutable once inserted; nothing here
//! ever updates or deletes.

pub mod auth;
pub mod models;
pub mod remote;
pub mod stats;
pub mod validate;
