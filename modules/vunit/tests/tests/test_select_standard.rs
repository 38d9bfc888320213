// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Standard selection through the real process environment. This binary changes
//! `VUNIT_VHDL_STANDARD`, so it holds a single test.

use anyhow::Result;
use std::env::{remove_var, set_var};
use ui_common::{select_vhdl_standard, Error, VHDL_STANDARD_ENV};
use vhdl_standard::VhdlStandard;

#[test]
fn test_environment_precedence() -> Result<()> {
    remove_var(VHDL_STANDARD_ENV);
    assert_eq!(select_vhdl_standard(None)?, VhdlStandard::Vhdl2008);

    set_var(VHDL_STANDARD_ENV, "2002");
    assert_eq!(select_vhdl_standard(None)?, VhdlStandard::Vhdl2002);
    assert_eq!(select_vhdl_standard(Some("2019"))?, VhdlStandard::Vhdl2019);

    set_var(VHDL_STANDARD_ENV, "vhdl93");
    let invalid = select_vhdl_standard(None);
    assert_eq!(select_vhdl_standard(Some("1993"))?, VhdlStandard::Vhdl1993);

    remove_var(VHDL_STANDARD_ENV);

    match invalid {
        Err(Error::InvalidStandard { value, .. }) => assert_eq!(value, "vhdl93"),
        other => panic!("Expected an invalid standard error, got {other:?}"),
    }
    Ok(())
}
