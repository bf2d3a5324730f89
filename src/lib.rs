//! Headless date-picker engine.
//!
//! Features:
//! - Month grids padded to full weeks with real adjacent-month days
//! - Single-date and two-click range selection
//! - Controlled/uncontrolled value reconciliation with an explicit
//!   authority flag
//! - Keyboard-navigation index arithmetic over the flattened grid
//! - Terminal rendering for the demo CLI

pub mod args;
pub mod controlled;
pub mod engine;
pub mod formatter;
pub mod grid;
pub mod keynav;
pub mod picker;
pub mod range;
pub mod types;
