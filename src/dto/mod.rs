//! DTO modules that bridge services with templates and APIs.

pub mod compare;
pub mod filings;
pub mod main;
pub mod managers;
