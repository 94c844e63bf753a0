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

#![warn(missing_docs)]

//! Goal-based agent.
//!
//! The agent believes a set of boolean propositions about the world and knows a fixed, ordered
//! list of actions, each with preconditions and effects over those propositions. Each step it
//! executes the first action whose preconditions hold, until its goal proposition is true.
//!
//! There is no search here: the agent never looks ahead and never backtracks. Whether it reaches
//! its goal depends entirely on the order of its action list.
//!
//! See Chapter 2: Intelligent Agents, section 2.4.4 Goal-based agents.

pub mod action;
pub mod agent;
pub mod scenario;
pub mod world_state;

pub use action::Action;
pub use agent::{
    cookie_and_water_actions, cookie_and_water_initial_state, step_world, GoalBasedAgent,
    RunConfig, RunOutcome, RunReport, StepOutcome,
};
pub use scenario::{Scenario, ScenarioError};
pub use world_state::WorldState;

/// Hash set used for bookkeeping that never needs a stable iteration order.
pub type HashSet<T> = rustc_hash::FxHashSet<T>;
