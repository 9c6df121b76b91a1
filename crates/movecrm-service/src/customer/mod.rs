//! Customer use cases.

pub mod form;
pub mod service;

pub use form::CustomerForm;
pub use service::CustomerManager;
