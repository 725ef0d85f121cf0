//! Dataset file DTOs.
//!
//! These types map directly to the bundled `routes.json` file. Route names
//! and place lists are optional there: placeholder slots are written as
//! `{ "id": "r7", "places": [] }` with no name.

use serde::{Deserialize, Serialize};

/// One day record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DayRecord {
    /// 0-based day index.
    pub id: usize,

    /// Day label, e.g. "Lunes".
    pub day: String,

    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// One route record within a day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `[street, schedule detail]` pairs.
    #[serde(default)]
    pub places: Vec<Vec<String>>,
}
