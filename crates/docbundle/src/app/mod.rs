//! Application layer orchestrating the scan and combine stages.

pub mod combine;
pub mod scan;
