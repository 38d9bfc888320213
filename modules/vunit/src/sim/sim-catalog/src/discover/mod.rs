// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Discovery of simulator installations under the candidate install roots
//!
//! Each catalog entry's glob for the target OS is joined with every install root in order.
//! Only directories count as matches. When several installations are found, the first root
//! with any match wins, and within that root the match with the greatest version embedded
//! in its path wins.

use crate::{
    data::{lookup, simulators, SimulatorEntry},
    expand_root, home, OsFamily,
};
use anyhow::{Context, Result};
use derive_getters::Getters;
use glob::{glob_with, MatchOptions, Pattern};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;
use versions::Versioning;

#[derive(TypedBuilder, Getters, Clone, Debug)]
/// Where and for which OS to search
pub struct DiscoveryOptions {
    #[builder(default = OsFamily::current())]
    /// OS family whose globs and default install roots are used
    os: OsFamily,
    #[builder(default, setter(into, strip_option))]
    /// Install roots to search instead of the defaults for `os`
    roots: Option<Vec<PathBuf>>,
    #[builder(default, setter(into, strip_option))]
    /// Directory that `~` in the default install roots expands to, instead of the user's home
    home: Option<PathBuf>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DiscoveryOptions {
    /// The install roots to search, in order, with `~` expanded
    pub fn search_roots(&self) -> Result<Vec<PathBuf>> {
        if let Some(roots) = &self.roots {
            return Ok(roots.clone());
        }

        let locations = self.os.install_locations();
        let home = match &self.home {
            Some(home) => home.clone(),
            None if locations.iter().any(|root| root.starts_with('~')) => home()?,
            None => PathBuf::new(),
        };

        Ok(locations
            .iter()
            .map(|root| expand_root(root, &home))
            .collect())
    }

    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.os == OsFamily::Unix,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        }
    }
}

#[derive(Getters, Serialize, Clone, Debug, PartialEq, Eq)]
/// A directory matching a simulator's install glob
pub struct Candidate {
    /// The install root the glob was joined with
    root: PathBuf,
    path: PathBuf,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// The installation chosen for a simulator
pub struct Installation {
    simulator: &'static SimulatorEntry,
    root: PathBuf,
    path: PathBuf,
}

impl Installation {
    pub fn simulator(&self) -> &'static SimulatorEntry {
        self.simulator
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The matched install directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Find every directory matching `entry`'s install glob under the search roots, in root
/// order. An entry with no glob for the target OS has no candidates.
pub fn candidates(entry: &SimulatorEntry, options: &DiscoveryOptions) -> Result<Vec<Candidate>> {
    let Some(pattern) = entry.install_pattern(*options.os()) else {
        debug!(
            simulator = entry.id(),
            os = %options.os(),
            "No install pattern, discovery not supported"
        );
        return Ok(Vec::new());
    };

    let match_options = options.match_options();
    let mut candidates = Vec::new();

    for root in options.search_roots()? {
        let search = Path::new(&Pattern::escape(&root.to_string_lossy())).join(pattern);
        let search = search.to_string_lossy();
        trace!(simulator = entry.id(), search = %search, "Searching install root");

        for path in glob_with(&search, match_options)
            .with_context(|| format!("Invalid install glob {search}"))?
            .filter_map(|result| match result {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(
                        simulator = entry.id(),
                        path = %e.path().display(),
                        error = %e.error(),
                        "Skipping unreadable path"
                    );
                    None
                }
            })
            .filter(|path| path.is_dir())
        {
            candidates.push(Candidate {
                root: root.clone(),
                path,
            });
        }
    }

    debug!(
        simulator = entry.id(),
        candidates = candidates.len(),
        "Searched install roots"
    );

    Ok(candidates)
}

/// Version numbers embedded in each component of `path`, read from the first digit of the
/// component onward
fn version_key(path: &Path) -> Vec<Versioning> {
    path.components()
        .filter_map(|component| {
            let component = component.as_os_str().to_str()?;
            let start = component.find(|c: char| c.is_ascii_digit())?;
            Versioning::new(&component[start..])
        })
        .collect()
}

fn compare_versions(a: &Path, b: &Path) -> Ordering {
    version_key(a)
        .cmp(&version_key(b))
        .then_with(|| a.cmp(b))
}

/// Pick one installation from `candidates`, which must be in root order: the first root
/// with a match wins, then the greatest version within that root
pub fn select_installation(candidates: &[Candidate]) -> Option<&Candidate> {
    let first_root = candidates.first()?.root();

    candidates
        .iter()
        .filter(|candidate| candidate.root() == first_root)
        .max_by(|a, b| compare_versions(a.path(), b.path()))
}

/// Locate the installation of catalog entry `entry`, if any
pub fn locate(
    entry: &'static SimulatorEntry,
    options: &DiscoveryOptions,
) -> Result<Option<Installation>> {
    let candidates = candidates(entry, options)?;

    Ok(select_installation(&candidates).map(|candidate| {
        debug!(
            simulator = entry.id(),
            path = %candidate.path().display(),
            "Selected installation"
        );
        Installation {
            simulator: entry,
            root: candidate.root().clone(),
            path: candidate.path().clone(),
        }
    }))
}

/// Locate the installation of the simulator with identifier `id`. Unknown identifiers,
/// simulators that cannot be found on the target OS, and simulators that are not installed
/// all give `None`.
pub fn find_installation<S>(id: S, options: &DiscoveryOptions) -> Result<Option<Installation>>
where
    S: AsRef<str>,
{
    match lookup(id.as_ref()) {
        Some(entry) => locate(entry, options),
        None => {
            debug!(simulator = id.as_ref(), "Unknown simulator");
            Ok(None)
        }
    }
}

/// Locate every installed simulator in the catalog, in catalog order
pub fn find_installations(options: &DiscoveryOptions) -> Result<Vec<Installation>> {
    simulators()
        .filter_map(|entry| locate(entry, options).transpose())
        .collect()
}
