//! Capability records for the per-platform camera diagnostic.

use serde::{Deserialize, Serialize};

/// A system capability the camera needs on the current platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}
