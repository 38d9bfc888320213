// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the VUnit front ends: turning user file patterns into checked file
//! lists, choosing the VHDL standard for a run, and normalizing generic names

#![deny(clippy::unwrap_used)]
#![forbid(unsafe_code)]

pub mod error;
pub mod files;
pub mod generics;
pub mod standard;

pub use error::{Error, Result};
pub use files::{check_not_empty, checked_file_names_from_globs, Patterns, ResolvedFileList};
pub use generics::lower_generics;
pub use standard::{select_vhdl_standard, select_vhdl_standard_with, VHDL_STANDARD_ENV};

/// Name of the directory, relative to the run root, that receives all test output
pub const TEST_OUTPUT_PATH: &str = "test_output";
