//! Scalar and vector math shared by the LunatiX physics crates.

pub mod float;
pub mod vector2d;

pub use float::{FNIL, approximately_equal, float_eq, is_zero};
pub use vector2d::{Vector2D, scalar_product, vector_norm, vector_product};
