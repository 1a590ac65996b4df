//! learntree - scaffolding and validation for learning-material trees
//!
//! Materializes and checks a two-level directory convention:
//! `<root>/<module>/{README.md, exercises/README.md, resources/}`

pub mod commands;
pub mod config;
pub mod models;
pub mod scaffold;
pub mod validation;
