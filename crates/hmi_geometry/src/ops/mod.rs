//! Operator implementations for [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix).
//!
//! Operators between a value and a bare scalar are implemented for `i32`,
//! `i64`, `f32` and `f64` only.

mod matrix;
mod vector;
