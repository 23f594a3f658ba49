// === PUBLIC CONTRACT ===
// Other crates should depend on `contract` only.
pub mod contract;

pub use contract::{client, error, model};

// === ERROR CATALOG ===
pub mod errors;

// === MODULE DEFINITION ===
pub mod module;
pub use config::PersonsConfig;
pub use module::Persons;

// === INTERNAL MODULES ===
// Exposed for tests and for the server binary's wiring; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
