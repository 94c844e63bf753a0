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

use crate::Environment;

/// ScriptedEnvironment replays a fixed sequence of percepts, one per action, and records the
/// actions it was asked to execute. Actions have no effect on what is perceived next.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEnvironment {
    percepts: Vec<String>,
    cursor: usize,
    executed_actions: Vec<String>,
}

impl ScriptedEnvironment {
    pub fn new<I, S>(percepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            percepts: percepts.into_iter().map(Into::into).collect(),
            cursor: 0,
            executed_actions: Vec::new(),
        }
    }

    pub fn executed_actions(&self) -> &[String] {
        &self.executed_actions
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.percepts.len()
    }
}

impl Environment for ScriptedEnvironment {
    type Action = String;
    type Percept = String;

    fn percept(&self) -> Option<Self::Percept> {
        self.percepts.get(self.cursor).cloned()
    }

    fn execute_action(&mut self, action: &Self::Action) {
        self.executed_actions.push(action.clone());
        self.cursor += 1;
    }
}
