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

use crate::{Agent, RuleTable, UNKNOWN_ACTION};

/// ModelBasedReflexAgent keeps a model of the world, here a single current-state symbol, and
/// decides from that model rather than from the raw Percept.
///
/// `perceive` overwrites the model with whatever it is given, including symbols the rule table
/// has no rule for. Deciding from such a state, or from no state at all, yields
/// [`UNKNOWN_ACTION`].
#[derive(Debug, Clone)]
pub struct ModelBasedReflexAgent {
    current_state: Option<String>,
    rules: RuleTable,
}

impl Default for ModelBasedReflexAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBasedReflexAgent {
    /// Vacuum rules, believing the floor starts out clean.
    pub fn new() -> Self {
        Self {
            current_state: Some("clean".to_string()),
            rules: RuleTable::vacuum(),
        }
    }

    /// Custom rules, with no belief about the world until the first `perceive`.
    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            current_state: None,
            rules,
        }
    }

    pub fn perceive(&mut self, percept: impl Into<String>) {
        let percept = percept.into();
        tracing::trace!(percept = %percept, "updating current state");
        self.current_state = Some(percept);
    }

    pub fn decide_action(&self) -> &str {
        match &self.current_state {
            Some(state) => self.rules.lookup(state),
            None => UNKNOWN_ACTION,
        }
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current_state.as_deref()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

impl Agent for ModelBasedReflexAgent {
    type Action = String;
    type Percept = String;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        self.perceive(percept.as_str());
        self.decide_action().to_owned()
    }
}
