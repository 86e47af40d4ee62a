//! Remote numeric service tools.
//!
//! - `client`: HTTP client for the MATLAB-style service and parameter coercion
//! - `reshape`: flat data plus `mwsize` to row-major matrix
//! - `magic`: the `calculate_magic_matrix` tool

pub mod client;
pub mod magic;
pub mod reshape;

pub use client::{MAGIC_PATH, MatlabClient, MatrixRequest, coerce_parameter};
pub use magic::{InvalidParameterResult, MagicMatrixParams, MagicMatrixTool};
pub use reshape::{MatrixResult, ReshapeError, flatten_row_major, normalize, reshape_row_major};
