// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use sim_catalog::{
    data::lookup,
    discover::{candidates, find_installation, find_installations, DiscoveryOptions},
    OsFamily,
};
use tests::{TestTree, TreeSpec};

fn installs() -> Result<TestTree> {
    TreeSpec::builder()
        .dirs([
            "first/ghdl/ghdl-1.0.0/bin",
            "first/ghdl/ghdl-10.0.0/bin",
            "first/ghdl/ghdl-9.2.0/bin",
            "second/ghdl/ghdl-11.0.0/bin",
            "second/modelsim_dlx/linux_x86_64",
            "second/Aldec/Riviera-PRO-2022.04-x64/bin",
            "second/intelFPGA/20.1/modelsim_ase/win32aloem",
        ])
        .files(["first/ghdl/ghdl-12.0.0/bin"])
        .build()
        .create()
}

fn unix_options(tree: &TestTree) -> DiscoveryOptions {
    DiscoveryOptions::builder()
        .os(OsFamily::Unix)
        .roots([tree.path().join("first"), tree.path().join("second")])
        .build()
}

#[test]
fn test_first_root_then_newest() -> Result<()> {
    let tree = installs()?;
    let installation = find_installation("ghdl", &unix_options(&tree))?
        .unwrap_or_else(|| panic!("ghdl should be found"));

    assert_eq!(installation.simulator().id(), "ghdl");
    assert_eq!(installation.root(), tree.path().join("first"));
    assert_eq!(
        installation.path(),
        tree.path().join("first/ghdl/ghdl-10.0.0/bin")
    );
    Ok(())
}

#[test]
fn test_candidates_in_root_order_and_directories_only() -> Result<()> {
    let tree = installs()?;
    let ghdl = lookup("ghdl").unwrap_or_else(|| panic!("ghdl should be in the catalog"));
    let found = candidates(ghdl, &unix_options(&tree))?;

    assert_eq!(found.len(), 4);
    assert!(found[..3]
        .iter()
        .all(|c| c.root() == &tree.path().join("first")));
    assert_eq!(found[3].path(), &tree.path().join("second/ghdl/ghdl-11.0.0/bin"));
    assert!(!found
        .iter()
        .any(|c| c.path().ends_with("ghdl-12.0.0/bin")));
    Ok(())
}

#[test]
fn test_not_found_outcomes() -> Result<()> {
    let tree = installs()?;
    let options = unix_options(&tree);

    assert!(find_installation("xsim", &options)?.is_none());
    // Installed, but there is no way to find it on this OS
    assert!(find_installation("riviera", &options)?.is_none());
    assert!(find_installation("msim_free", &options)?.is_none());

    let empty = TreeSpec::builder().build().create()?;
    let options = DiscoveryOptions::builder()
        .os(OsFamily::Unix)
        .roots([empty.path().to_path_buf()])
        .build();
    assert!(find_installation("ghdl", &options)?.is_none());
    assert!(find_installations(&options)?.is_empty());
    Ok(())
}

#[test]
fn test_windows_patterns() -> Result<()> {
    let tree = installs()?;
    let options = DiscoveryOptions::builder()
        .os(OsFamily::Windows)
        .roots([tree.path().join("second")])
        .build();

    let riviera = find_installation("riviera", &options)?
        .unwrap_or_else(|| panic!("riviera should be found"));
    assert_eq!(
        riviera.path(),
        tree.path().join("second/Aldec/Riviera-PRO-2022.04-x64/bin")
    );

    let msim_free = find_installation("msim_free", &options)?
        .unwrap_or_else(|| panic!("msim_free should be found"));
    assert_eq!(msim_free.simulator().output_path(), "modelsim_free");
    Ok(())
}

#[test]
fn test_all_installations_in_catalog_order() -> Result<()> {
    let tree = installs()?;
    let ids = find_installations(&unix_options(&tree))?
        .iter()
        .map(|installation| installation.simulator().id())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["msim", "ghdl"]);
    Ok(())
}

#[test]
fn test_home_roots() -> Result<()> {
    let home = TreeSpec::builder()
        .dirs(["modelsim/modelsim_dlx/linux64"])
        .build()
        .create()?;
    let options = DiscoveryOptions::builder()
        .os(OsFamily::Unix)
        .home(home.path())
        .build();

    let roots = options.search_roots()?;
    assert_eq!(roots[1], home.path());
    assert_eq!(roots[3], home.path().join("modelsim"));

    let msim = find_installation("msim", &options)?
        .unwrap_or_else(|| panic!("msim should be found under the home roots"));
    assert_eq!(
        msim.path(),
        home.path().join("modelsim/modelsim_dlx/linux64")
    );
    Ok(())
}
