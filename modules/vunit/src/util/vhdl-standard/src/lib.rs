// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! VHDL language standard revisions, ordered by year, with the feature predicates the
//! compile flow needs to decide which constructs a standard supports
//!
//! # Examples
//!
//! ```
//! use vhdl_standard::VhdlStandard;
//! use std::str::FromStr;
//!
//! let standard = VhdlStandard::from_str("2019")?;
//! assert!(standard.supports_context());
//! assert!(standard > VhdlStandard::BASELINE);
//! assert_eq!(standard.to_string(), "2019");
//! # Ok::<(), vhdl_standard::Error>(())
//! ```

#![deny(clippy::unwrap_used)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// An error parsing a VHDL standard
pub enum Error {
    #[error("Unknown VHDL standard {value:?}, expected one of 1993, 2002, 2008, 2019")]
    Unknown { value: String },
}

#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
/// A revision of the IEEE 1076 VHDL language standard
pub enum VhdlStandard {
    #[strum(serialize = "1993")]
    #[serde(rename = "1993")]
    /// IEEE 1076-1993
    Vhdl1993,
    #[strum(serialize = "2002")]
    #[serde(rename = "2002")]
    /// IEEE 1076-2002
    Vhdl2002,
    #[strum(serialize = "2008")]
    #[serde(rename = "2008")]
    /// IEEE 1076-2008
    Vhdl2008,
    #[strum(serialize = "2019")]
    #[serde(rename = "2019")]
    /// IEEE 1076-2019
    Vhdl2019,
}

impl VhdlStandard {
    /// The standard used when nothing else is requested
    pub const BASELINE: Self = Self::Vhdl2008;

    pub fn year(&self) -> u16 {
        match self {
            Self::Vhdl1993 => 1993,
            Self::Vhdl2002 => 2002,
            Self::Vhdl2008 => 2008,
            Self::Vhdl2019 => 2019,
        }
    }

    /// Whether `context` declarations and references are part of this standard
    pub fn supports_context(&self) -> bool {
        *self >= Self::Vhdl2008
    }

    /// This standard and every later one, oldest first
    pub fn and_later(&self) -> Vec<Self> {
        Self::iter().filter(|s| s >= self).collect()
    }

    /// Every earlier standard and this one, oldest first
    pub fn and_earlier(&self) -> Vec<Self> {
        Self::iter().filter(|s| s <= self).collect()
    }
}

impl FromStr for VhdlStandard {
    type Err = Error;

    /// Parse a standard from its four digit year, e.g. `2008`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|standard| standard.to_string() == s)
            .ok_or_else(|| Error::Unknown {
                value: s.to_string(),
            })
    }
}

impl Default for VhdlStandard {
    fn default() -> Self {
        Self::BASELINE
    }
}
