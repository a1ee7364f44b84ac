//! Typed records read from backend payloads.

pub mod filing;
