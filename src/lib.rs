//! Consulta library exports for testing

pub mod answer;
pub mod core;
pub mod intake;
pub mod tui;

#[cfg(test)]
pub mod test_support;
