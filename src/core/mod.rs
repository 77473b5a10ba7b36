//! Core calculation engine
//!
//! Pure, synchronous quote computation. Nothing in here performs I/O or
//! mutates shared state; collaborators (holiday calendar, config store) are
//! injected by the service layer.

pub mod quote;
