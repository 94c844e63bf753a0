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

//! The agent and its run loop.

use tracing::{debug, info, warn};

use crate::{Action, HashSet, WorldState};

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The first executable action in the list was executed.
    Executed {
        /// Name of the executed action.
        action: String,

        /// Whether executing it changed any proposition.
        changed: bool,

        /// Whether the goal holds after executing it.
        goal_achieved: bool,
    },

    /// No action in the list was executable. The world state is untouched.
    NoExecutableAction,

    /// The goal already held, so nothing was considered. The world state is untouched.
    GoalAlreadyAchieved,
}

/// How a run ended. `steps` counts executed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The goal proposition is true.
    GoalAchieved {
        /// Executed actions.
        steps: usize,
    },

    /// The last step left the world state as it was, so every later step would too.
    NoProgressPossible {
        /// Executed actions.
        steps: usize,
    },

    /// The world state after the last step had already been seen during this run. Action
    /// selection is deterministic, so the agent would go round the same loop forever.
    CycleDetected {
        /// Executed actions.
        steps: usize,
    },

    /// [`RunConfig::max_steps`] actions were executed without reaching the goal.
    StepBudgetExhausted {
        /// Executed actions.
        steps: usize,
    },
}

impl RunOutcome {
    /// Number of actions executed during the run.
    pub fn steps(&self) -> usize {
        match *self {
            RunOutcome::GoalAchieved { steps }
            | RunOutcome::NoProgressPossible { steps }
            | RunOutcome::CycleDetected { steps }
            | RunOutcome::StepBudgetExhausted { steps } => steps,
        }
    }

    /// Whether the run ended with the goal achieved.
    pub fn is_goal_achieved(&self) -> bool {
        matches!(self, RunOutcome::GoalAchieved { .. })
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::GoalAchieved { steps } => write!(f, "goal achieved after {} steps", steps),
            RunOutcome::NoProgressPossible { steps } => {
                write!(f, "no progress possible after {} steps", steps)
            }
            RunOutcome::CycleDetected { steps } => write!(f, "cycle detected after {} steps", steps),
            RunOutcome::StepBudgetExhausted { steps } => {
                write!(f, "step budget exhausted after {} steps", steps)
            }
        }
    }
}

/// Limits on a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Stop after this many executed actions. `None` for no limit.
    pub max_steps: Option<usize>,

    /// Stop as soon as the world state repeats.
    pub detect_cycles: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            detect_cycles: true,
        }
    }
}

/// The actions executed during a run and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Names of executed actions, in order.
    pub executed: Vec<String>,

    /// How the run ended.
    pub outcome: RunOutcome,

    /// The goal the run was working towards.
    pub goal: Option<String>,
}

impl RunReport {
    /// Human-readable transcript: one line per executed action, then a line for the goal if it
    /// was achieved.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .executed
            .iter()
            .map(|action| format!("Executing action: {}", action))
            .collect();
        if let (RunOutcome::GoalAchieved { .. }, Some(goal)) = (self.outcome, &self.goal) {
            lines.push(format!("Goal achieved: {}", goal));
        }
        lines
    }
}

/// Execute the first action in `actions` whose preconditions hold in `state`.
///
/// At most one action is executed per call, even if later actions are also executable. Once the
/// goal holds, nothing is executed.
pub fn step_world(actions: &[Action], state: &mut WorldState, goal: Option<&str>) -> StepOutcome {
    if goal.map_or(false, |goal| state.get(goal)) {
        debug!(goal, "goal already achieved");
        return StepOutcome::GoalAlreadyAchieved;
    }
    for action in actions {
        if !action.can_execute(state) {
            debug!(action = action.name(), "preconditions not met");
            continue;
        }
        let changed = action.execute(state);
        let goal_achieved = goal.map_or(false, |goal| state.get(goal));
        info!(action = action.name(), changed, goal_achieved, "executed action");
        return StepOutcome::Executed {
            action: action.name().to_owned(),
            changed,
            goal_achieved,
        };
    }
    debug!("no executable action");
    StepOutcome::NoExecutableAction
}

/// GoalBasedAgent owns its world state, its ordered action list and its goal.
#[derive(Debug, Clone)]
pub struct GoalBasedAgent {
    state: WorldState,
    actions: Vec<Action>,
    goal: Option<String>,
}

impl GoalBasedAgent {
    /// Create an agent with no goal.
    pub fn new(initial_state: WorldState, actions: Vec<Action>) -> Self {
        Self {
            state: initial_state,
            actions,
            goal: None,
        }
    }

    /// Create an agent that knows how to take and eat a cookie, and how to get and drink water.
    pub fn cookie_and_water(initial_state: WorldState) -> Self {
        Self::new(initial_state, cookie_and_water_actions())
    }

    /// Set the goal proposition, replacing any previous goal. The goal need not be declared in
    /// the world state or reachable by any action.
    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = Some(goal.into());
    }

    /// The goal proposition, if one was set.
    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    /// Whether the goal proposition is true. Always false when no goal is set.
    pub fn is_goal_achieved(&self) -> bool {
        self.goal
            .as_deref()
            .map_or(false, |goal| self.state.get(goal))
    }

    /// Current world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Actions, in the order they are considered.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Execute the first executable action, if any. Does nothing once the goal holds.
    pub fn step(&mut self) -> StepOutcome {
        step_world(&self.actions, &mut self.state, self.goal.as_deref())
    }

    /// Step until the goal is achieved or no further progress is possible.
    pub fn run(&mut self) -> RunReport {
        self.run_with_config(&RunConfig::default())
    }

    /// Step until the goal is achieved, or until the run would otherwise never end.
    ///
    /// If the goal already holds, no step is taken.
    pub fn run_with_config(&mut self, config: &RunConfig) -> RunReport {
        self.run_with_observer(config, |_| {})
    }

    /// Like [`GoalBasedAgent::run_with_config`], calling `on_executed` with each action's name
    /// as soon as it has been executed.
    pub fn run_with_observer<F>(&mut self, config: &RunConfig, mut on_executed: F) -> RunReport
    where
        F: FnMut(&str),
    {
        let mut executed = Vec::new();
        let mut seen: HashSet<Vec<String>> = HashSet::default();
        if config.detect_cycles {
            seen.insert(self.snapshot());
        }

        let outcome = loop {
            let steps = executed.len();
            if self.is_goal_achieved() {
                break RunOutcome::GoalAchieved { steps };
            }
            if config.max_steps.map_or(false, |max_steps| steps >= max_steps) {
                break RunOutcome::StepBudgetExhausted { steps };
            }

            match self.step() {
                StepOutcome::GoalAlreadyAchieved => {
                    break RunOutcome::GoalAchieved { steps };
                }
                StepOutcome::NoExecutableAction => {
                    break RunOutcome::NoProgressPossible { steps };
                }
                StepOutcome::Executed {
                    action, changed, ..
                } => {
                    on_executed(&action);
                    executed.push(action);
                    let steps = executed.len();
                    if !changed {
                        break RunOutcome::NoProgressPossible { steps };
                    }
                    if config.detect_cycles
                        && !self.is_goal_achieved()
                        && !seen.insert(self.snapshot())
                    {
                        break RunOutcome::CycleDetected { steps };
                    }
                }
            }
        };

        if outcome.is_goal_achieved() {
            info!(goal = ?self.goal, %outcome, "run finished");
        } else {
            warn!(goal = ?self.goal, state = %self.state, %outcome, "goal not reached");
        }

        RunReport {
            executed,
            outcome,
            goal: self.goal.clone(),
        }
    }

    fn snapshot(&self) -> Vec<String> {
        self.state.true_propositions().map(str::to_owned).collect()
    }
}

/// Take a cookie, eat it; get water, drink it. In that order.
pub fn cookie_and_water_actions() -> Vec<Action> {
    vec![
        Action::new("TakeCookie", &[("CookieInHand", false)], &[("CookieInHand", true)]),
        Action::new(
            "EatCookie",
            &[("CookieInHand", true)],
            &[("EatingCookie", true), ("CookieInHand", false)],
        ),
        Action::new("GetWater", &[("WaterInHand", false)], &[("WaterInHand", true)]),
        Action::new(
            "DrinkWater",
            &[("WaterInHand", true)],
            &[("DrinkingWater", true), ("WaterInHand", false)],
        ),
    ]
}

/// Nobody holds or consumes anything yet.
pub fn cookie_and_water_initial_state() -> WorldState {
    [
        ("CookieInHand", false),
        ("WaterInHand", false),
        ("EatingCookie", false),
        ("DrinkingWater", false),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn cookie_agent(goal: &str) -> GoalBasedAgent {
        let mut agent = GoalBasedAgent::cookie_and_water(cookie_and_water_initial_state());
        agent.set_goal(goal);
        agent
    }

    #[test]
    fn test_eats_cookie_in_two_actions() {
        let mut agent = cookie_agent("EatingCookie");
        let report = agent.run();
        assert_eq!(report.executed, vec!["TakeCookie", "EatCookie"]);
        assert_eq!(report.outcome, RunOutcome::GoalAchieved { steps: 2 });
        assert!(agent.state().get("EatingCookie"));
        assert!(!agent.state().get("CookieInHand"));
        assert!(!agent.state().get("WaterInHand"));
        assert!(!agent.state().get("DrinkingWater"));
    }

    #[test]
    fn test_transcript_lines() {
        let mut agent = cookie_agent("EatingCookie");
        assert_eq!(
            agent.run().lines(),
            vec![
                "Executing action: TakeCookie",
                "Executing action: EatCookie",
                "Goal achieved: EatingCookie",
            ]
        );
    }

    #[test]
    fn test_step_executes_only_first_executable_action() {
        // TakeCookie and GetWater are both executable from the initial state.
        let mut agent = cookie_agent("EatingCookie");
        assert_eq!(
            agent.step(),
            StepOutcome::Executed {
                action: "TakeCookie".to_string(),
                changed: true,
                goal_achieved: false,
            }
        );
        assert!(agent.state().get("CookieInHand"));
        assert!(!agent.state().get("WaterInHand"));
    }

    #[test]
    fn test_step_reports_goal_achieved() {
        let mut agent = cookie_agent("EatingCookie");
        agent.step();
        assert_eq!(
            agent.step(),
            StepOutcome::Executed {
                action: "EatCookie".to_string(),
                changed: true,
                goal_achieved: true,
            }
        );
        assert!(agent.is_goal_achieved());
    }

    #[test]
    fn test_step_after_goal_achieved_does_not_mutate() {
        let mut agent = cookie_agent("EatingCookie");
        agent.run();
        let before = agent.state().clone();

        assert_eq!(agent.step(), StepOutcome::GoalAlreadyAchieved);
        assert_eq!(agent.state(), &before);
        assert!(!agent.state().get("CookieInHand"));
    }

    #[test]
    fn test_step_world_with_goal_true_is_untouched() {
        let mut state: WorldState = [("Outside", true)].into_iter().collect();
        let actions = vec![Action::new("Leave", &[], &[("Outside", false)])];
        assert_eq!(
            step_world(&actions, &mut state, Some("Outside")),
            StepOutcome::GoalAlreadyAchieved
        );
        assert!(state.get("Outside"));
    }

    #[test]
    fn test_observer_sees_each_action_as_executed() {
        let mut agent = cookie_agent("EatingCookie");
        let mut seen = Vec::new();
        let report = agent.run_with_observer(&RunConfig::default(), |action| {
            seen.push(action.to_string())
        });
        assert_eq!(seen, report.executed);
        assert_eq!(seen, vec!["TakeCookie", "EatCookie"]);
    }

    #[test]
    fn test_actions_keep_declared_order() {
        let agent = cookie_agent("EatingCookie");
        let names: Vec<&str> = agent.actions().iter().map(Action::name).collect();
        assert_eq!(names, vec!["TakeCookie", "EatCookie", "GetWater", "DrinkWater"]);
    }

    #[test]
    fn test_run_after_goal_achieved_does_nothing() {
        let mut agent = cookie_agent("EatingCookie");
        agent.run();
        let state_after_first_run = agent.state().clone();

        let report = agent.run();
        assert!(report.executed.is_empty());
        assert_eq!(report.outcome, RunOutcome::GoalAchieved { steps: 0 });
        assert_eq!(agent.state(), &state_after_first_run);
    }

    #[test]
    fn test_goal_already_true_takes_no_step() {
        let initial: WorldState = [("EatingCookie", true)].into_iter().collect();
        let mut agent = GoalBasedAgent::cookie_and_water(initial.clone());
        agent.set_goal("EatingCookie");
        let report = agent.run();
        assert!(report.executed.is_empty());
        assert_eq!(agent.state(), &initial);
    }

    #[test]
    fn test_set_goal_overwrites_previous_goal() {
        let mut agent = cookie_agent("EatingCookie");
        agent.set_goal("WaterInHand");
        assert_eq!(agent.goal(), Some("WaterInHand"));
    }

    #[test]
    fn test_no_goal_is_never_achieved() {
        let mut agent = GoalBasedAgent::cookie_and_water(cookie_and_water_initial_state());
        assert!(!agent.is_goal_achieved());
        let report = agent.run();
        assert!(!report.outcome.is_goal_achieved());
        // no goal line without a goal.
        assert!(report.lines().iter().all(|l| l.starts_with("Executing action: ")));
    }

    #[test]
    fn test_undeclared_goal_is_not_achieved() {
        let agent = cookie_agent("Flying");
        assert!(!agent.is_goal_achieved());
    }

    #[test]
    fn test_list_order_hides_later_actions() {
        // TakeCookie/EatCookie alternate forever and GetWater is never reached.
        let mut agent = cookie_agent("DrinkingWater");
        let report = agent.run();
        assert_eq!(
            report.executed,
            vec!["TakeCookie", "EatCookie", "TakeCookie", "EatCookie"]
        );
        assert_eq!(report.outcome, RunOutcome::CycleDetected { steps: 4 });
        assert!(!agent.state().get("WaterInHand"));
    }

    #[test]
    fn test_step_budget_without_cycle_detection() {
        let mut agent = cookie_agent("Flying");
        let config = RunConfig {
            max_steps: Some(7),
            detect_cycles: false,
        };
        let report = agent.run_with_config(&config);
        assert_eq!(report.outcome, RunOutcome::StepBudgetExhausted { steps: 7 });
        assert_eq!(report.executed.len(), 7);
        assert!(report.lines().iter().all(|l| !l.starts_with("Goal achieved")));
    }

    #[test]
    fn test_zero_step_budget() {
        let mut agent = cookie_agent("EatingCookie");
        let config = RunConfig {
            max_steps: Some(0),
            ..RunConfig::default()
        };
        let report = agent.run_with_config(&config);
        assert_eq!(report.outcome, RunOutcome::StepBudgetExhausted { steps: 0 });
        assert_eq!(agent.state(), &cookie_and_water_initial_state());
    }

    #[test]
    fn test_no_executable_action_is_no_progress() {
        let actions = vec![Action::new(
            "EatCookie",
            &[("CookieInHand", true)],
            &[("EatingCookie", true)],
        )];
        let mut agent = GoalBasedAgent::new(WorldState::new(), actions);
        agent.set_goal("EatingCookie");
        assert_eq!(agent.step(), StepOutcome::NoExecutableAction);
        assert_eq!(agent.state(), &WorldState::new());
        assert_eq!(agent.run().outcome, RunOutcome::NoProgressPossible { steps: 0 });
    }

    #[test]
    fn test_action_that_changes_nothing_is_no_progress() {
        let actions = vec![Action::new("Wait", &[], &[("Waiting", false)])];
        let mut agent = GoalBasedAgent::new(WorldState::new(), actions);
        agent.set_goal("Done");
        let report = agent.run();
        assert_eq!(report.executed, vec!["Wait"]);
        assert_eq!(report.outcome, RunOutcome::NoProgressPossible { steps: 1 });
    }

    #[test]
    fn test_undeclared_precondition_treated_as_false() {
        let actions = vec![
            Action::new(
                "OpenDoor",
                &[("DoorLocked", false), ("DoorOpen", false)],
                &[("DoorOpen", true)],
            ),
            Action::new("Leave", &[("DoorOpen", true)], &[("Outside", true)]),
        ];
        let mut agent = GoalBasedAgent::new(WorldState::new(), actions);
        agent.set_goal("Outside");
        let report = agent.run();
        assert_eq!(report.executed, vec!["OpenDoor", "Leave"]);
        assert!(report.outcome.is_goal_achieved());
    }

    #[test]
    fn test_run_outcome_display() {
        assert_eq!(
            RunOutcome::CycleDetected { steps: 4 }.to_string(),
            "cycle detected after 4 steps"
        );
        assert_eq!(RunOutcome::GoalAchieved { steps: 2 }.steps(), 2);
    }

    fn goal_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("CookieInHand"),
            Just("WaterInHand"),
            Just("EatingCookie"),
            Just("DrinkingWater"),
            Just("Flying"),
        ]
    }

    proptest! {
        #[test]
        fn test_run_is_deterministic(
            initial in prop::collection::btree_map(goal_strategy(), any::<bool>(), 0..3),
            goal in goal_strategy(),
        ) {
            let initial: WorldState = initial.into_iter().collect();
            let mut first = GoalBasedAgent::cookie_and_water(initial.clone());
            first.set_goal(goal);
            let mut second = GoalBasedAgent::cookie_and_water(initial);
            second.set_goal(goal);

            let first_report = first.run();
            let second_report = second.run();
            prop_assert_eq!(&first_report, &second_report);
            prop_assert_eq!(first.state(), second.state());
        }

        #[test]
        fn test_run_always_terminates_and_reports_goal_truthfully(
            initial in prop::collection::btree_map(goal_strategy(), any::<bool>(), 0..3),
            goal in goal_strategy(),
        ) {
            let mut agent = GoalBasedAgent::cookie_and_water(initial.into_iter().collect());
            agent.set_goal(goal);
            let report = agent.run();
            prop_assert_eq!(report.outcome.is_goal_achieved(), agent.is_goal_achieved());
            prop_assert_eq!(report.outcome.steps(), report.executed.len());
        }
    }
}
