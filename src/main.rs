use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufReader};
use std::process;

mod error;
mod output;
mod quiz;
mod settings;

use crate::output::TerminalOutput;
use crate::quiz::collector::LineCollector;
use crate::quiz::definition::ProblemSet;
use crate::quiz::Quiz;
use crate::settings::{CliOptions, Settings};

fn load_problems(settings: &Settings) -> Result<ProblemSet> {
    let problems = ProblemSet::open(&settings.problems_path).with_context(|| {
        format!(
            "Could not load quiz from {}",
            settings.problems_path.display()
        )
    })?;
    if problems.is_empty() {
        warn!("{} has no problems", settings.problems_path.display());
    } else {
        info!(
            "Loaded {} problems from {}",
            problems.len(),
            settings.problems_path.display()
        );
    }

    if !settings.shuffle {
        return Ok(problems);
    }
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(problems.shuffle(&mut rng))
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let settings: Settings = CliOptions::parse().into();
    info!("Starting quiz with {:?}", settings);

    let problems = match load_problems(&settings) {
        Ok(problems) => problems,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            process::exit(1);
        }
    };

    let collector = LineCollector::new(BufReader::new(io::stdin()));
    let quiz = Quiz::new(problems, settings.quiz, collector, TerminalOutput::stdout());
    let outcome = quiz.run().await;
    info!("Quiz over: {:?}", outcome);
}
