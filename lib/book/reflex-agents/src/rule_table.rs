/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Action returned for any condition the rule table has no rule for.
pub const UNKNOWN_ACTION: &str = "unknown_action";

/// Rule table error.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    /// Rule table file could not be read.
    #[error("failed to read rule table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rule table is not a JSON object of strings to strings.
    #[error("malformed rule table: {0}")]
    Json(#[from] serde_json::Error),
}

/// RuleTable holds condition-action rules, keyed by percept (or by the agent's current state
/// for a model-based agent).
///
/// Conditions are open-ended text rather than a closed enum, so a table can be extended without
/// touching the agents. A condition without a rule maps to [`UNKNOWN_ACTION`]; that is a defined
/// fallback, not an error.
///
/// A table is fixed once built; there is no way to add a rule to an existing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<String, String>,
}

impl RuleTable {
    /// The vacuum-cleaner rules: suck up dirt, steer around obstacles, idle on empty floor.
    pub fn vacuum() -> Self {
        [
            ("dirty", "clean"),
            ("obstacle", "move_around"),
            ("empty", "do_nothing"),
        ]
        .into_iter()
        .collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RuleTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Look up the action for a condition, falling back to [`UNKNOWN_ACTION`].
    pub fn lookup(&self, condition: &str) -> &str {
        self.rules
            .get(condition)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ACTION)
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.rules.contains_key(condition)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RuleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
