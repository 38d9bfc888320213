// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Execution of the parsed subcommands

use crate::args::Command;
use anyhow::{anyhow, bail, Result};
use serde_json::to_writer_pretty;
use sim_catalog::{
    data::{lookup, simulators},
    discover::{find_installations, locate, DiscoveryOptions, Installation},
    OsFamily,
};
use std::{io::Write, path::PathBuf};
use tracing::info;
use ui_common::{checked_file_names_from_globs, select_vhdl_standard};

fn discovery_options(os: OsFamily, roots: Vec<PathBuf>) -> DiscoveryOptions {
    if roots.is_empty() {
        DiscoveryOptions::builder().os(os).build()
    } else {
        DiscoveryOptions::builder().os(os).roots(roots).build()
    }
}

fn write_installations<W>(installations: &[Installation], json: bool, out: &mut W) -> Result<()>
where
    W: Write,
{
    if json {
        to_writer_pretty(&mut *out, installations)?;
        writeln!(out)?;
    } else {
        for installation in installations {
            writeln!(
                out,
                "{}\t{}",
                installation.simulator().id(),
                installation.path().display()
            )?;
        }
    }
    Ok(())
}

/// Run `command`, writing its output to `out`
pub fn run<W>(command: Command, out: &mut W) -> Result<()>
where
    W: Write,
{
    match command {
        Command::Files {
            allow_empty,
            patterns,
        } => {
            for file_name in checked_file_names_from_globs(patterns, allow_empty)? {
                writeln!(out, "{file_name}")?;
            }
        }
        Command::Standard { standard } => {
            writeln!(out, "{}", select_vhdl_standard(standard.as_deref())?)?;
        }
        Command::Simulators { json } => {
            if json {
                to_writer_pretty(&mut *out, &simulators().collect::<Vec<_>>())?;
                writeln!(out)?;
            } else {
                for entry in simulators() {
                    writeln!(
                        out,
                        "{}\t{}\t{}",
                        entry.id(),
                        entry.family(),
                        entry.output_path()
                    )?;
                }
            }
        }
        Command::Find {
            id,
            os,
            roots,
            json,
        } => {
            let options = discovery_options(os, roots);
            let installations = match id {
                Some(id) => {
                    let entry = lookup(&id).ok_or_else(|| anyhow!("Unknown simulator {id}"))?;
                    if entry.install_pattern(os).is_none() {
                        bail!("Discovery of {id} is not supported on {os}");
                    }
                    let installation = locate(entry, &options)?
                        .ok_or_else(|| anyhow!("No installation of {id} found"))?;
                    vec![installation]
                }
                None => find_installations(&options)?,
            };
            info!(found = installations.len(), "Discovery finished");
            write_installations(&installations, json, out)?;
        }
    }

    Ok(())
}
