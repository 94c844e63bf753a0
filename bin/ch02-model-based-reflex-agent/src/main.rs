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
use reflex_agents::{ModelBasedReflexAgent, RuleTable, ScriptedEnvironment, Simulation};

// Chapter 2 Intelligent Agents, model-based reflex agent.
//
// Each percept first updates the agent's model of the world; the action is then chosen from the
// model. With a single-symbol model this behaves like the simple reflex agent, but the decision
// is made from remembered state rather than from the percept directly.
#[derive(Debug, Parser)]
#[command(about = "Replay percepts through a model-based reflex agent")]
struct Args {
    /// JSON object mapping states to actions. Defaults to the vacuum-cleaner rules.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Percepts to replay, in order.
    #[arg(default_values = ["dirty", "obstacle", "empty"])]
    percepts: Vec<String>,
}

fn transcript(args: &Args) -> anyhow::Result<Vec<String>> {
    let agent = match &args.rules {
        Some(path) => ModelBasedReflexAgent::with_rules(RuleTable::from_json_file(path)?),
        None => ModelBasedReflexAgent::new(),
    };
    tracing::debug!(rules = agent.rules().len(), "loaded rules");
    let environment = ScriptedEnvironment::new(args.percepts.iter().cloned());
    let mut simulation = Simulation::new(environment, agent);
    let decisions = simulation.run();
    tracing::debug!(
        current_state = simulation.agent().current_state(),
        "replayed all percepts"
    );
    Ok(decisions
        .iter()
        .map(|decision| format!("Action taken: {}", decision.action))
        .collect())
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
    for line in transcript(&args)? {
        println!("{}", line);
    }
    Ok(())
}
