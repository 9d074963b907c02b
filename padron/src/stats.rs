//! Dashboard summary figures, derived from the full row list on every
//! load. The list is small enough that nothing is cached.
use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::models::Registration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub today: usize,
    pub unique_centros: usize,
}

/// Computes the three summary figures.
///
/// `today` counts rows whose `created_at`, rendered as a calendar date in
/// the viewer's local zone, equals `hoy`. Rows are timestamped in UTC, so
/// the count can shift near midnight depending on the viewer's zone; this
/// is a known limitation, kept as-is.
pub fn compute(rows: &[Registration], hoy: NaiveDate) -> Stats {
    let today = rows
        .iter()
        .filter(|r| r.created_at.with_timezone(&Local).date_naive() == hoy)
        .count();

    let unique_centros = rows
        .iter()
        .map(|r| r.centro_electoral.as_str())
        .collect::<HashSet<_>>()
        .len();

    Stats {
        total: rows.len(),
        today,
        unique_centros,
    }
}
