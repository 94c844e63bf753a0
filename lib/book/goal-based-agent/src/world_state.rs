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

//! Boolean propositions the agent believes about the world.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the agent currently believes about the world, as named boolean propositions.
///
/// A proposition that was never declared reads as `false`. Propositions are overwritten but never
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    propositions: BTreeMap<String, bool>,
}

impl WorldState {
    /// Create an empty world state, in which every proposition is false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the truth value of a proposition, `false` if it was never declared.
    pub fn get(&self, name: &str) -> bool {
        self.propositions.get(name).copied().unwrap_or(false)
    }

    /// Set a proposition, declaring it if needed. Returns whether its truth value changed.
    ///
    /// Declaring a new proposition as `false` is not a change, since it already read as `false`.
    pub fn set(&mut self, name: impl Into<String>, value: bool) -> bool {
        let previous = self.propositions.insert(name.into(), value);
        previous.unwrap_or(false) != value
    }

    /// Whether the proposition has been declared, either initially or by an effect.
    pub fn is_declared(&self, name: &str) -> bool {
        self.propositions.contains_key(name)
    }

    /// Iterate over declared propositions, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.propositions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Names of the propositions that are currently true, ordered by name.
    ///
    /// Two states with the same true propositions behave identically for every action and goal.
    pub fn true_propositions(&self) -> impl Iterator<Item = &str> {
        self.propositions
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
    }
}

impl<K> FromIterator<(K, bool)> for WorldState
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self {
            propositions: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl std::fmt::Display for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
