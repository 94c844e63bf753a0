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

use crate::{Agent, RuleTable};

/// SimpleReflexAgent picks an Action from the current Percept alone. It keeps no state between
/// percepts; the rule table is fixed at construction.
#[derive(Debug, Clone)]
pub struct SimpleReflexAgent {
    rules: RuleTable,
}

impl Default for SimpleReflexAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleReflexAgent {
    pub fn new() -> Self {
        Self::with_rules(RuleTable::vacuum())
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn decide(&self, percept: &str) -> &str {
        self.rules.lookup(percept)
    }
}

impl Agent for SimpleReflexAgent {
    type Action = String;
    type Percept = String;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        self.decide(percept).to_owned()
    }
}
