//! CLI commands for namesake

pub mod analyze;
pub mod check;
pub mod dispatch;
pub mod extract;
pub mod matches;
pub mod similar;
