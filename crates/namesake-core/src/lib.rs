//! Namesake Core Library
//!
//! Proper-noun extraction from narrative text and fuzzy name matching
//! against an external catalog.

pub mod analysis;
pub mod archives;
pub mod batch;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod similarity;
pub mod text;
