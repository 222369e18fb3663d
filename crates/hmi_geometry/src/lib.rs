//! Small fixed-size vectors and matrices for 2D interface code.

pub mod color;
mod matrix;
mod ops;
mod scalar;
mod vector;

pub use color::{Color, Color3};
pub use matrix::*;
pub use scalar::Scalar;
pub use vector::*;
