//! sy-board core library
//!
//! Builds the board graph, computes seeker and hider distance tables and
//! emits the XML documents read by the game runtime.

pub mod board;
pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod graph;
pub mod logging;
