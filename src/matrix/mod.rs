//! Matrix containers and the transpose they all share.
//!
//! Two layouts of the same square `f32` matrix:
//! - `rows`: one heap buffer per row, indexed as `m[(i, j)]` through the row
//! - `flat`: one contiguous row-major buffer, element (i, j) at `i * n + j`

pub mod flat;
pub mod rows;
pub mod transpose;

pub use flat::FlatMatrix;
pub use rows::RowMatrix;
