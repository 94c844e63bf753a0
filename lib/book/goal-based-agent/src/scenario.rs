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

//! Scenarios loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    cookie_and_water_actions, cookie_and_water_initial_state, Action, GoalBasedAgent, HashSet,
    WorldState,
};

/// Scenario error.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Scenario file could not be read.
    #[error("failed to read scenario {}: {source}", .path.display())]
    Io {
        /// Path of the scenario file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Scenario is not valid JSON, or does not have the expected shape.
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// Two actions share a name, so transcripts could not tell them apart.
    #[error("duplicate action: {0}")]
    DuplicateAction(String),
}

/// Everything needed to set up a goal-based agent: initial beliefs, actions in the order they
/// are considered, and optionally a goal.
///
/// ```json
/// {
///   "initial_state": {"CookieInHand": false},
///   "actions": [
///     {"name": "TakeCookie", "preconditions": {"CookieInHand": false}, "effects": {"CookieInHand": true}}
///   ],
///   "goal": "CookieInHand"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Initial world state. Missing means every proposition starts false.
    #[serde(default)]
    pub initial_state: WorldState,

    /// Actions, in the order they are considered.
    pub actions: Vec<Action>,

    /// Goal proposition.
    #[serde(default)]
    pub goal: Option<String>,
}

impl Scenario {
    /// The cookie-and-water scenario, with the goal of eating the cookie.
    pub fn cookie_and_water() -> Self {
        Self {
            initial_state: cookie_and_water_initial_state(),
            actions: cookie_and_water_actions(),
            goal: Some("EatingCookie".to_string()),
        }
    }

    /// Parse and validate a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check that action names are unique.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut names = HashSet::default();
        for action in &self.actions {
            if !names.insert(action.name()) {
                return Err(ScenarioError::DuplicateAction(action.name().to_string()));
            }
        }
        Ok(())
    }

    /// Build the agent, with the goal set if the scenario has one.
    pub fn into_agent(self) -> GoalBasedAgent {
        let mut agent = GoalBasedAgent::new(self.initial_state, self.actions);
        if let Some(goal) = self.goal {
            agent.set_goal(goal);
        }
        agent
    }
}
