// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod assessment;
pub mod config;
pub mod country;
pub mod education;
pub mod engine;
pub mod experience;
pub mod inputs;
pub mod metrics;
pub mod report;
pub mod salary;
pub mod schedule;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::assessment::{Assessment, Tier};
pub use crate::engine::{evaluate, WorthResult};
pub use crate::inputs::WorkInputs;
