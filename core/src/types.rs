//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration test catches any drift between the two crates. `NewHero`
//! has no `id` field, so a hero id can only ever come from the backend.

use serde::{Deserialize, Serialize};

/// A hero as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Request payload for creating a hero. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Opaque acknowledgement body returned by update and delete.
///
/// An empty response body (e.g. `204 No Content`) decodes to `Value::Null`.
pub type Ack = serde_json::Value;
