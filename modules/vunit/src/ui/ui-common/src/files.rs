// Copyright (C) 2023 Intel Corporation
// SPDX-License-Identifier: Apache-2.0

//! Expansion of user supplied file patterns into checked lists of file names
//!
//! Patterns are expanded relative to the current working directory. `**` as a whole path
//! component matches any number of directory levels, and a final `**` matches everything
//! below its directory. Elsewhere `**` is the same as `*`, a `[` with no closing `]` is a
//! literal character, and wildcards never match a leading `.` unless the pattern spells it
//! out, the same as a shell glob.

use crate::error::{Error, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{is_separator, Path, PathBuf};
use tracing::{debug, warn};

/// File names produced by pattern expansion, in pattern order and then match order
pub type ResolvedFileList = Vec<String>;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One pattern or an ordered collection of patterns
pub enum Patterns {
    Single(String),
    Multiple(Vec<String>),
}

impl Patterns {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Patterns::Single(pattern) => vec![pattern],
            Patterns::Multiple(patterns) => patterns,
        }
    }
}

fn path_string<P>(path: P) -> String
where
    P: AsRef<Path>,
{
    path.as_ref().to_string_lossy().into_owned()
}

impl From<&str> for Patterns {
    fn from(value: &str) -> Self {
        Patterns::Single(value.to_string())
    }
}

impl From<String> for Patterns {
    fn from(value: String) -> Self {
        Patterns::Single(value)
    }
}

impl From<&Path> for Patterns {
    fn from(value: &Path) -> Self {
        Patterns::Single(path_string(value))
    }
}

impl From<PathBuf> for Patterns {
    fn from(value: PathBuf) -> Self {
        Patterns::Single(path_string(value))
    }
}

impl<S> From<Vec<S>> for Patterns
where
    S: AsRef<Path>,
{
    fn from(value: Vec<S>) -> Self {
        Patterns::Multiple(value.iter().map(path_string).collect())
    }
}

impl<S> From<&[S]> for Patterns
where
    S: AsRef<Path>,
{
    fn from(value: &[S]) -> Self {
        Patterns::Multiple(value.iter().map(path_string).collect())
    }
}

impl<S, const N: usize> From<[S; N]> for Patterns
where
    S: AsRef<Path>,
{
    fn from(value: [S; N]) -> Self {
        Patterns::Multiple(value.iter().map(path_string).collect())
    }
}

/// Return `list` unchanged unless it is empty and `allow_empty` is false, in which case the
/// error built by `on_empty` is returned instead
pub fn check_not_empty<T, F>(list: Vec<T>, allow_empty: bool, on_empty: F) -> Result<Vec<T>>
where
    F: FnOnce() -> Error,
{
    if !allow_empty && list.is_empty() {
        Err(on_empty())
    } else {
        Ok(list)
    }
}

/// Index of the `]` closing the character class opened at `start`. A `]` directly after
/// the opening `[` or `[!` is a class member, not the end.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if chars.get(i) == Some(&'!') {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    chars
        .get(i..)?
        .iter()
        .position(|c| *c == ']')
        .map(|offset| i + offset)
}

fn normalize_component(component: &str, normalized: &mut String) {
    if component == "**" {
        normalized.push_str(component);
        return;
    }

    let chars = component.chars().collect::<Vec<_>>();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                normalized.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    normalized.extend(&chars[i..=end]);
                    i = end;
                }
                None => normalized.push_str("[[]"),
            },
            c => normalized.push(c),
        }
        i += 1;
    }
}

/// Rewrite `pattern` so the glob matcher reads it the way a shell glob does: runs of `*`
/// inside a component collapse to `*`, and an unclosed `[` is escaped. Character classes
/// never span a path separator.
fn normalize(pattern: &str) -> String {
    let mut normalized = String::with_capacity(pattern.len());
    let mut component = String::new();

    for c in pattern.chars() {
        if is_separator(c) {
            normalize_component(&component, &mut normalized);
            normalized.push(c);
            component.clear();
        } else {
            component.push(c);
        }
    }
    normalize_component(&component, &mut normalized);

    normalized
}

/// Run the glob matcher on `search`, skipping entries that cannot be read. `pattern` is the
/// user's pattern, for errors and logs.
fn glob_paths(pattern: &str, search: &str) -> Result<Vec<PathBuf>> {
    let paths = glob_with(search, MATCH_OPTIONS).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(
                    pattern,
                    path = %e.path().display(),
                    error = %e.error(),
                    "Skipping unreadable path"
                );
                None
            }
        })
        .collect())
}

/// Every directory matched by `prefix`, each followed by everything below it
fn expand_below(pattern: &str, prefix: &str) -> Result<Vec<PathBuf>> {
    let base = match prefix.trim_end_matches(is_separator) {
        "" => prefix,
        base => base,
    };

    let mut paths = Vec::new();

    for dir in glob_paths(pattern, base)?
        .into_iter()
        .filter(|path| path.is_dir())
    {
        let below = Path::new(&Pattern::escape(&dir.to_string_lossy()))
            .join("**")
            .join("*");
        let below = glob_paths(pattern, &below.to_string_lossy())?;
        paths.push(dir);
        paths.extend(below);
    }

    Ok(paths)
}

/// Expand a single pattern
fn expand(pattern: &str) -> Result<Vec<String>> {
    // An empty pattern names nothing, rather than the working directory
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = normalize(pattern);

    // The matcher only yields directories for a final `**`
    let paths = match normalized
        .strip_suffix("**")
        .filter(|prefix| prefix.is_empty() || prefix.ends_with(is_separator))
    {
        Some("") => glob_paths(pattern, "**/*")?,
        Some(prefix) => expand_below(pattern, prefix)?,
        None => glob_paths(pattern, &normalized)?,
    };

    Ok(paths.into_iter().map(path_string).collect())
}

/// Get the file names matched by one or more patterns, checking that each pattern matched
/// at least one file unless `allow_empty` is set.
///
/// The first pattern that matches nothing aborts the whole call; the file names matched by
/// earlier patterns are discarded. Results are not sorted or deduplicated.
pub fn checked_file_names_from_globs<P>(patterns: P, allow_empty: bool) -> Result<ResolvedFileList>
where
    P: Into<Patterns>,
{
    let mut file_names = ResolvedFileList::new();

    for pattern in patterns.into().into_vec() {
        let new_file_names = expand(&pattern)?;
        debug!(
            pattern = pattern.as_str(),
            matches = new_file_names.len(),
            "Expanded pattern"
        );
        let new_file_names =
            check_not_empty(new_file_names, allow_empty, || Error::NoMatch { pattern })?;
        file_names.extend(new_file_names);
    }

    Ok(file_names)
}
