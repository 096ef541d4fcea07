//! Command execution for sy-board

pub mod dispatch;
pub mod generate;
