//! Common test utilities for colormap-tool.
//!
//! Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod image_utils;
