//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod echo;
pub mod matlab;

pub use echo::{EchoParams, EchoTool};
pub use matlab::{MagicMatrixParams, MagicMatrixTool, MatrixResult};
