//! Service layer between the HTTP boundary and the store.
//! - `wish`: validates caller input and classifies store outcomes into the
//!   three-way vocabulary the boundary maps to HTTP statuses.
//! - `christmas`: the stateless novelty helpers (pure functions, no store).

pub mod christmas;
pub mod errors;
pub mod wish;
