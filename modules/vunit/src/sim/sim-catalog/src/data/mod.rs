// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! The compiled-in simulator catalog

use crate::OsFamily;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
/// Canonical product family, which selects the simulator interface used to drive it
pub enum SimulatorFamily {
    /// ModelSim and Questa
    Modelsim,
    /// Aldec Riviera-PRO
    Rivierapro,
    Ghdl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A known simulator edition and how to recognize its installation
pub struct SimulatorEntry {
    id: &'static str,
    family: SimulatorFamily,
    win_path_pattern: Option<&'static str>,
    linux_path_pattern: Option<&'static str>,
    output_path: Option<&'static str>,
}

impl SimulatorEntry {
    const fn new(
        id: &'static str,
        family: SimulatorFamily,
        win_path_pattern: Option<&'static str>,
        linux_path_pattern: Option<&'static str>,
        output_path: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            family,
            win_path_pattern,
            linux_path_pattern,
            output_path,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn family(&self) -> SimulatorFamily {
        self.family
    }

    /// The glob, relative to an install root, that matches an installation of this
    /// simulator on `os`. `None` means there is no known way to find it on that OS.
    pub const fn install_pattern(&self, os: OsFamily) -> Option<&'static str> {
        match os {
            OsFamily::Windows => self.win_path_pattern,
            OsFamily::Unix => self.linux_path_pattern,
        }
    }

    /// Name of the output subdirectory for this simulator, its identifier unless
    /// overridden
    pub const fn output_path(&self) -> &'static str {
        match self.output_path {
            Some(output_path) => output_path,
            None => self.id,
        }
    }
}

impl Serialize for SimulatorEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut entry = serializer.serialize_struct("SimulatorEntry", 5)?;
        entry.serialize_field("id", self.id)?;
        entry.serialize_field("family", &self.family)?;
        entry.serialize_field("win_path_pattern", &self.win_path_pattern)?;
        entry.serialize_field("linux_path_pattern", &self.linux_path_pattern)?;
        // Resolved, so consumers never see the identifier fallback as a null
        entry.serialize_field("output_path", self.output_path())?;
        entry.end()
    }
}

/// Every simulator the framework knows how to find, keyed by identifier
pub static SIMULATORS: [SimulatorEntry; 5] = [
    SimulatorEntry::new(
        "msim_free",
        SimulatorFamily::Modelsim,
        Some("intelFPGA/*/modelsim_ase/win32aloem"),
        None,
        Some("modelsim_free"),
    ),
    SimulatorEntry::new(
        "msim",
        SimulatorFamily::Modelsim,
        Some("modelsim_dlx*_*/win*"),
        Some("modelsim_dlx/linux*"),
        Some("modelsim"),
    ),
    SimulatorEntry::new(
        "riviera",
        SimulatorFamily::Rivierapro,
        Some("Aldec/Riviera-PRO-*-x*/bin"),
        None,
        Some("rivierapro"),
    ),
    // Questa shares the riviera output directory
    SimulatorEntry::new(
        "qsim",
        SimulatorFamily::Modelsim,
        Some("questasim*_*/win*"),
        None,
        Some("rivierapro"),
    ),
    SimulatorEntry::new(
        "ghdl",
        SimulatorFamily::Ghdl,
        Some("git-sdk-64/mingw64/bin"),
        Some("ghdl/ghdl-*/bin"),
        None,
    ),
];

/// All catalog entries in declaration order
pub fn simulators() -> impl Iterator<Item = &'static SimulatorEntry> {
    SIMULATORS.iter()
}

/// Catalog entries belonging to `family`, in declaration order
pub fn simulators_in_family(
    family: SimulatorFamily,
) -> impl Iterator<Item = &'static SimulatorEntry> {
    simulators().filter(move |entry| entry.family() == family)
}

/// Find the catalog entry for `id`
pub fn lookup<S>(id: S) -> Option<&'static SimulatorEntry>
where
    S: AsRef<str>,
{
    simulators().find(|entry| entry.id() == id.as_ref())
}

/// The install glob for simulator `id` on `os`, if the simulator is known and can be found
/// on that OS
pub fn install_glob_for<S>(id: S, os: OsFamily) -> Option<&'static str>
where
    S: AsRef<str>,
{
    lookup(id).and_then(|entry| entry.install_pattern(os))
}
