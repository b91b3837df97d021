//! One-time bulk load of departments at startup.
//!
//! The file is a JSON array of `{"department": {"name": ...}}` envelopes.
//! Entries are created in file order, so they receive sequential IDs
//! starting at 1. The load is best-effort: a missing or malformed file
//! logs a warning and loads nothing, it never fails startup.

use serde::Deserialize;

use crate::registry::DepartmentRegistry;

#[derive(Debug, Deserialize)]
struct DepartmentEnvelope {
    department: DepartmentSeed,
}

#[derive(Debug, Deserialize)]
struct DepartmentSeed {
    name: String,
}

/// Returns the number of departments loaded.
pub fn load_departments(path: &str, registry: &DepartmentRegistry) -> usize {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("could not read departments file {}: {}", path, err);
            return 0;
        }
    };

    let envelopes: Vec<DepartmentEnvelope> = match serde_json::from_str(&raw) {
        Ok(envelopes) => envelopes,
        Err(err) => {
            tracing::warn!("could not parse departments file {}: {}", path, err);
            return 0;
        }
    };

    let count = envelopes.len();
    for envelope in envelopes {
        registry.create(envelope.department.name);
    }
    tracing::info!("loaded {} departments from {}", count, path);
    count
}
