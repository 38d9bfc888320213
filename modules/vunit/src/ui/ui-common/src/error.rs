// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a requested VHDL standard came from
pub enum StandardSource {
    /// Passed directly by the caller
    Explicit,
    /// Read from the `VUNIT_VHDL_STANDARD` environment variable, or its default
    Environment,
}

impl Display for StandardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandardSource::Explicit => write!(f, "the caller"),
            StandardSource::Environment => {
                write!(f, "the {} environment variable", crate::VHDL_STANDARD_ENV)
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
/// Validation errors raised while preparing a run
pub enum Error {
    #[error("Pattern {pattern:?} did not match any file. Use allow_empty to avoid this error.")]
    NoMatch { pattern: String },
    #[error("Pattern {pattern:?} is not a valid glob: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("Invalid VHDL standard {value:?} set by {origin}")]
    InvalidStandard {
        value: String,
        origin: StandardSource,
        source: vhdl_standard::Error,
    },
}
