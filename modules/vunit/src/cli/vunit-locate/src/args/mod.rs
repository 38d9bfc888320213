// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};
use sim_catalog::OsFamily;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[arg(short = 'l', long, default_value_t = LevelFilter::WARN)]
    /// Output log level
    ///
    /// Logging level may be set to OFF, ERROR, WARN, INFO, DEBUG, or TRACE. Logs are
    /// written to stderr so they do not mix with command output.
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve file patterns to the files they match
    ///
    /// Patterns are expanded relative to the current working directory and `**` matches
    /// any number of directories. Each matching file is printed on its own line, in
    /// pattern order. It is an error for any pattern to match nothing unless
    /// --allow-empty is given.
    Files {
        #[arg(short = 'e', long, default_value_t = false)]
        /// Allow patterns that match no files
        allow_empty: bool,
        /// File patterns to resolve
        patterns: Vec<String>,
    },
    /// Print the VHDL standard that would be used
    ///
    /// If STANDARD is not given, the VUNIT_VHDL_STANDARD environment variable is used,
    /// and if that is not set either, 2008.
    Standard {
        /// Explicit standard, one of 1993, 2002, 2008, or 2019
        standard: Option<String>,
    },
    /// List the simulators in the catalog
    Simulators {
        #[arg(short = 'j', long, default_value_t = false)]
        /// Print the catalog as JSON
        json: bool,
    },
    /// Locate installed simulators
    ///
    /// Searches the install roots for the given OS family for the simulator with
    /// identifier ID, or for every simulator in the catalog if ID is not given.
    Find {
        /// Simulator identifier, e.g. ghdl or msim
        id: Option<String>,
        #[arg(short = 'o', long, default_value_t = OsFamily::current())]
        /// OS family whose install globs and roots are used
        os: OsFamily,
        #[arg(short = 'r', long = "root")]
        /// Install root to search instead of the defaults. May be given more than once
        roots: Vec<PathBuf>,
        #[arg(short = 'j', long, default_value_t = false)]
        /// Print installations as JSON
        json: bool,
    },
}
