pub mod client;
pub mod error;
pub mod model;

pub use client::PersonsApi;
pub use error::PersonsError;
pub use model::{NewPerson, Person};
