//! Error macros for sy-board

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::BoardError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting an edge whose endpoint lies outside the board
#[macro_export]
macro_rules! bail_out_of_range {
    ($index:expr, $vertex:expr, $vertex_count:expr) => {
        return Err($crate::error::BoardError::VertexOutOfRange {
            index: $index,
            vertex: $vertex,
            vertex_count: $vertex_count,
        })
    };
}
