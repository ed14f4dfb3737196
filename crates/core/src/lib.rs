//! Core business logic for Livingcost.
//!
//! This crate contains pure calculation and presentation logic with ZERO web
//! dependencies.
//!
//! # Modules
//!
//! - `currency` - Conversion, margin and display rounding
//! - `expense` - Input rules and the cost calculator
//! - `report` - Summary sentences, breakdown table and CSV export
//! - `settings` - Per-process calculator settings built from configuration

pub mod currency;
pub mod expense;
pub mod report;
pub mod settings;

pub use settings::CalculatorSettings;
