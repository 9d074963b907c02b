//! # Operator client
//!
//! The registration form, the admin gate, and the dashboard as terminal
//! flows. Each one is an explicit state machine over the shared `padron`
//! domain, talking straight to the remote row store, the same control
//! flow a browser frontend would run.

pub mod dashboard;
pub mod form;
pub mod gate;
pub mod notice;
pub mod session;
