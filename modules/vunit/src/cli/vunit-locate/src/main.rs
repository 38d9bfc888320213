// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Resolve VUnit source patterns, select the VHDL standard, and locate installed simulators
//! from the command line

#![deny(clippy::unwrap_used)]
#![forbid(unsafe_code)]

use anyhow::Result;
use args::Args;
use clap::Parser;
use std::io::{stderr, stdout};

mod args;
mod command;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(stderr)
        .init();

    command::run(args.command, &mut stdout().lock())
}
