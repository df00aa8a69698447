//! Integration connectivity testing

pub mod checks;
pub mod tester;
