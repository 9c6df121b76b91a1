//! Customer records.

pub mod model;

pub use model::{Customer, CustomerPatch, NewCustomer};
