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

use std::path::PathBuf;

use clap::Parser;
use goal_based_agent::{RunConfig, RunReport, Scenario};

// Chapter 2 Intelligent Agents, goal-based agent.
//
// The agent starts with nothing in hand and wants to be eating a cookie. Each step it takes the
// first action whose preconditions hold:
//
//   Executing action: TakeCookie
//   Executing action: EatCookie
//   Goal achieved: EatingCookie
#[derive(Debug, Parser)]
#[command(about = "Run a goal-based agent until its goal proposition holds")]
struct Args {
    /// JSON scenario with initial_state, actions and goal. Defaults to the cookie-and-water
    /// scenario.
    #[arg(long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Goal proposition, replacing the scenario's goal.
    #[arg(long)]
    goal: Option<String>,

    /// Give up after this many actions.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Keep going when the world state repeats. Only useful together with --max-steps.
    #[arg(long)]
    no_cycle_detection: bool,
}

fn run<F>(args: &Args, on_executed: F) -> anyhow::Result<RunReport>
where
    F: FnMut(&str),
{
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::from_json_file(path)?,
        None => Scenario::cookie_and_water(),
    };
    if let Some(goal) = &args.goal {
        scenario.goal = Some(goal.clone());
    }
    if args.no_cycle_detection && args.max_steps.is_none() {
        anyhow::bail!("--no-cycle-detection needs --max-steps, or an unreachable goal never ends");
    }

    let config = RunConfig {
        max_steps: args.max_steps,
        detect_cycles: !args.no_cycle_detection,
    };
    let mut agent = scenario.into_agent();
    let actions: Vec<&str> = agent.actions().iter().map(|action| action.name()).collect();
    tracing::info!(initial_state = %agent.state(), ?actions, goal = ?agent.goal(), "starting");
    Ok(agent.run_with_observer(&config, on_executed))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let report = run(&args, |action| println!("Executing action: {}", action))?;
    match (&report.outcome, &report.goal) {
        (outcome, Some(goal)) if outcome.is_goal_achieved() => {
            println!("Goal achieved: {}", goal);
            Ok(())
        }
        (outcome, _) => anyhow::bail!("goal not reached: {}", outcome),
    }
}
