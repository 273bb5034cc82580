//! API middleware stack.

pub mod audit;
