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
use reflex_agents::{RuleTable, ScriptedEnvironment, SimpleReflexAgent, Simulation};

// Chapter 2 Intelligent Agents, simple reflex agent.
//
// The agent sees one percept at a time and looks up what to do in its condition-action rules.
// It remembers nothing, so the same percept always gets the same action.
#[derive(Debug, Parser)]
#[command(about = "Replay percepts through a simple reflex agent")]
struct Args {
    /// JSON object mapping percepts to actions. Defaults to the vacuum-cleaner rules.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Percepts to replay, in order.
    #[arg(default_values = ["dirty", "obstacle", "empty"])]
    percepts: Vec<String>,
}

fn transcript(args: &Args) -> anyhow::Result<Vec<String>> {
    let rules = match &args.rules {
        Some(path) => RuleTable::from_json_file(path)?,
        None => RuleTable::vacuum(),
    };
    let agent = SimpleReflexAgent::with_rules(rules);
    tracing::debug!(rules = agent.rules().len(), "loaded rules");
    let environment = ScriptedEnvironment::new(args.percepts.iter().cloned());
    let mut simulation = Simulation::new(environment, agent);
    Ok(simulation
        .run()
        .iter()
        .map(|decision| decision.to_string())
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
    tracing::debug!(?args, "starting");
    for line in transcript(&args)? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transcript() {
        let args = Args::parse_from(["ch02-simple-reflex-agent"]);
        assert_eq!(
            transcript(&args).expect("default rules"),
            vec![
                "Perceived: dirty -> Action taken: clean",
                "Perceived: obstacle -> Action taken: move_around",
                "Perceived: empty -> Action taken: do_nothing",
            ]
        );
    }

    #[test]
    fn test_unknown_percept_transcript() {
        let args = Args::parse_from(["ch02-simple-reflex-agent", "wet"]);
        assert_eq!(
            transcript(&args).expect("default rules"),
            vec!["Perceived: wet -> Action taken: unknown_action"]
        );
    }

    #[test]
    fn test_missing_rules_file_is_an_error() {
        let args = Args::parse_from([
            "ch02-simple-reflex-agent",
            "--rules",
            "/no/such/rules.json",
        ]);
        assert!(transcript(&args).is_err());
    }
}
