// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use tracing::warn;

/// Convert all generic names to lower case to match the internal representation. VHDL
/// identifiers are case insensitive, so two names differing only in case refer to the same
/// generic; the later value wins and the collision is logged.
pub fn lower_generics<I, K, V>(generics: I) -> HashMap<String, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    let mut lowered = HashMap::new();
    let mut spellings: HashMap<String, String> = HashMap::new();

    for (name, value) in generics {
        let name = name.as_ref();
        let lower = name.to_lowercase();

        if let Some(previous) = spellings
            .insert(lower.clone(), name.to_string())
            .filter(|previous| previous != name)
        {
            warn!(
                previous = previous.as_str(),
                name, "Generic names differ only in case, using the last value"
            );
        }

        lowered.insert(lower, value);
    }

    lowered
}
