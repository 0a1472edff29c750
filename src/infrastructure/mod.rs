//! Infrastructure layer - implementations of the domain traits

pub mod logging;
pub mod migrations;
pub mod user;
