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

//! Actions with preconditions and effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::WorldState;

/// Action is something the agent can do: executable when every precondition matches the world
/// state, and when executed it overwrites each proposition named in its effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    name: String,
    #[serde(default)]
    preconditions: BTreeMap<String, bool>,
    #[serde(default)]
    effects: BTreeMap<String, bool>,
}

impl Action {
    /// Create an action from its name, preconditions and effects.
    pub fn new(
        name: impl Into<String>,
        preconditions: &[(&str, bool)],
        effects: &[(&str, bool)],
    ) -> Self {
        let to_map = |pairs: &[(&str, bool)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            name: name.into(),
            preconditions: to_map(preconditions),
            effects: to_map(effects),
        }
    }

    /// Name of the action.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preconditions, ordered by proposition name.
    pub fn preconditions(&self) -> impl Iterator<Item = (&str, bool)> {
        self.preconditions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Effects, ordered by proposition name.
    pub fn effects(&self) -> impl Iterator<Item = (&str, bool)> {
        self.effects.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Check if every precondition matches the world state. Undeclared propositions are compared
    /// as `false`.
    pub fn can_execute(&self, state: &WorldState) -> bool {
        self.preconditions
            .iter()
            .all(|(name, expected)| state.get(name) == *expected)
    }

    /// Apply the effects to the world state. Returns whether any proposition changed value.
    pub fn execute(&self, state: &mut WorldState) -> bool {
        let mut changed = false;
        for (name, value) in &self.effects {
            changed |= state.set(name.as_str(), *value);
        }
        changed
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
