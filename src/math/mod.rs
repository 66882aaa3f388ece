//! Numeric kernels.

pub mod batch_dot;
pub mod dot_product;
