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

// Reflex agents driven by condition-action rule tables.
//
// See:
// -  Chapter 2: Intelligent Agents, section 2.4.2 Simple reflex agents
// -  Chapter 2: Intelligent Agents, section 2.4.3 Model-based reflex agents

pub mod model_based_reflex;
pub mod rule_table;
pub mod scripted;
pub mod simple_reflex;

pub use model_based_reflex::ModelBasedReflexAgent;
pub use rule_table::{RuleTable, RuleTableError, UNKNOWN_ACTION};
pub use scripted::ScriptedEnvironment;
pub use simple_reflex::SimpleReflexAgent;

/// An Agent acts in a Performance, Environment, Action, Sensing (PEAS) cycle.
/// For a given Perception, the Agent will return an Action.
///
/// A simple reflex agent ignores everything but the current Percept. A model-based reflex agent
/// folds the Percept into its internal state first and then decides from that state.
///
/// Notice that the Agent is not aware of an Environment, it's only interface
/// is the Perception coming in then the Action going out.
pub trait Agent {
    type Action;
    type Percept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action;
}

/// An Environment runs a single Agent in a PEAS cycle.
///
/// `percept` returns `None` once the Environment has nothing more to show the Agent, which ends
/// the Simulation.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    type Action;
    type Percept;

    fn percept(&self) -> Option<Self::Percept>;
    fn execute_action(&mut self, action: &Self::Action);
}

/// One turn of a Simulation: what the Agent saw and what it did about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<_Percept, _Action> {
    pub percept: _Percept,
    pub action: _Action,
}

impl<_Percept, _Action> std::fmt::Display for Decision<_Percept, _Action>
where
    _Percept: std::fmt::Display,
    _Action: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Perceived: {} -> Action taken: {}", self.percept, self.action)
    }
}

/// A Simulation runs a single Agent in PEAS cycles until the Environment runs out of percepts,
/// or until `time_steps` cycles have run if a limit is set.
///
/// The Simulation is aware of both the Environment and the single Agent. Notice that the Agent's
/// generic Action and Percept come from the Environment.
pub struct Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    environment: _Environment,
    agent: _Agent,
    time_steps: Option<usize>,
}

impl<_Environment, _Agent> Simulation<_Environment, _Agent>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
{
    pub fn new(environment: _Environment, agent: _Agent) -> Self {
        Self {
            environment,
            agent,
            time_steps: None,
        }
    }

    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = Some(time_steps);
        self
    }

    pub fn run(&mut self) -> Vec<Decision<_Environment::Percept, _Environment::Action>> {
        let mut decisions = Vec::new();
        while self.time_steps.map_or(true, |limit| decisions.len() < limit) {
            let Some(percept) = self.environment.percept() else {
                break;
            };
            let action = self.agent.act(&percept);
            self.environment.execute_action(&action);
            tracing::debug!(time_step = decisions.len(), "agent acted");
            decisions.push(Decision { percept, action });
        }
        decisions
    }

    pub fn environment(&self) -> &_Environment {
        &self.environment
    }

    pub fn agent(&self) -> &_Agent {
        &self.agent
    }
}
