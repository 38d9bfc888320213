// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Known HDL simulators and where to look for them
//!
//! The [`data`] module is the compiled-in catalog: for every simulator identifier, the
//! product family it belongs to, the glob that indicates an installation relative to a
//! candidate root directory, and the name of the output subdirectory used for it. The
//! [`discover`] module joins those globs with the install roots for the host and picks an
//! installation when more than one is present.
//!
//! ```
//! use sim_catalog::{data::{install_glob_for, lookup}, OsFamily};
//!
//! let ghdl = lookup("ghdl").ok_or_else(|| anyhow::anyhow!("ghdl is in the catalog"))?;
//! assert_eq!(ghdl.output_path(), "ghdl");
//! assert_eq!(install_glob_for("riviera", OsFamily::Unix), None);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(clippy::unwrap_used)]
#![forbid(unsafe_code)]

#[allow(deprecated)]
use std::env::home_dir;
// NOTE: Use of deprecated home_dir is ok because the "incorrect" windows behavior (honoring
// HOME before the profile directory) matches how the install roots are written.
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod data;
pub mod discover;

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
/// Host operating system family, which decides the install roots and globs to use
pub enum OsFamily {
    Windows,
    /// Linux and macOS
    Unix,
}

impl OsFamily {
    /// The family of the host this was compiled for
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The ordered candidate root directories searched on this family
    pub const fn install_locations(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => WIN_INSTALL_LOCATIONS,
            Self::Unix => LINUX_INSTALL_LOCATIONS,
        }
    }
}

/// Candidate install roots on Windows, searched in order
pub const WIN_INSTALL_LOCATIONS: &[&str] = &["C:/", "~", "C:/git-sdk-64/mingw64"];
/// Candidate install roots on Linux and macOS, searched in order
pub const LINUX_INSTALL_LOCATIONS: &[&str] =
    &["/", "~/", "/tools/", "~/modelsim", "~/programs/modelSim"];

/// Retrieve the current user's home directory
pub fn home() -> Result<PathBuf> {
    #[allow(deprecated)]
    home_dir().ok_or_else(|| anyhow!("No home directory found"))
}

/// Expand a leading `~` in an install root to `home`. Roots not starting with `~` are
/// returned as-is.
pub fn expand_root<S>(root: S, home: &Path) -> PathBuf
where
    S: AsRef<str>,
{
    let root = root.as_ref();
    match root.strip_prefix('~') {
        Some(rest) => {
            let rest = rest.trim_start_matches(&['/', '\\'][..]);
            if rest.is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        None => PathBuf::from(root),
    }
}
