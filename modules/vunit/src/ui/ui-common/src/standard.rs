// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Selection of the VHDL standard for a run

use crate::error::{Error, Result, StandardSource};
use std::{env::var_os, str::FromStr};
use tracing::error;
use vhdl_standard::VhdlStandard;

/// Environment variable that overrides the VHDL standard when the caller does not pass one
pub const VHDL_STANDARD_ENV: &str = "VUNIT_VHDL_STANDARD";
/// Value used when neither the caller nor the environment names a standard
pub const DEFAULT_VHDL_STANDARD: &str = "2008";

/// Select the VHDL standard from `vhdl_standard` if given, otherwise from
/// `VUNIT_VHDL_STANDARD`, otherwise 2008
pub fn select_vhdl_standard(vhdl_standard: Option<&str>) -> Result<VhdlStandard> {
    select_vhdl_standard_with(vhdl_standard, |name| {
        var_os(name).map(|value| value.to_string_lossy().into_owned())
    })
}

/// Same as [`select_vhdl_standard`], reading the environment through `lookup`.
///
/// An invalid environment value is logged at error level before the error is returned.
pub fn select_vhdl_standard_with<F>(vhdl_standard: Option<&str>, lookup: F) -> Result<VhdlStandard>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(value) = vhdl_standard {
        return VhdlStandard::from_str(value).map_err(|source| Error::InvalidStandard {
            value: value.to_string(),
            origin: StandardSource::Explicit,
            source,
        });
    }

    let value = lookup(VHDL_STANDARD_ENV).unwrap_or_else(|| DEFAULT_VHDL_STANDARD.to_string());

    VhdlStandard::from_str(&value).map_err(|source| {
        error!(
            value = value.as_str(),
            "Invalid standard set by {VHDL_STANDARD_ENV} environment variable"
        );
        Error::InvalidStandard {
            value,
            origin: StandardSource::Environment,
            source,
        }
    })
}
