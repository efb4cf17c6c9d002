//! Route matching gate for the guard.

pub mod matcher;
