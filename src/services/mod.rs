pub mod compare;
pub mod errors;
pub mod filings;
pub mod main;
pub mod managers;

pub use errors::{ServiceError, ServiceResult};
