use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::quiz;

#[derive(Parser, Debug)]
#[command(version, about = "Answer as many questions as you can before the timer runs out", long_about = None)]
pub struct CliOptions {
    /// CSV file with one `question,answer` pair per line
    #[arg(long, value_name = "PATH", default_value = "problems.csv")]
    file: PathBuf,

    /// Ask the questions in a random order
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    shuffle: bool,

    /// Time limit for the whole quiz, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timer: u64,

    /// Seed for the shuffle, to replay the same question order
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

#[derive(Debug)]
pub struct Settings {
    pub problems_path: PathBuf,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub quiz: quiz::Settings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            problems_path: PathBuf::from("problems.csv"),
            shuffle: true,
            seed: None,
            quiz: Default::default(),
        }
    }
}

impl From<CliOptions> for Settings {
    fn from(options: CliOptions) -> Self {
        Settings {
            problems_path: options.file,
            shuffle: options.shuffle,
            seed: options.seed,
            quiz: quiz::Settings {
                time_limit: Duration::from_secs(options.timer),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let args = std::iter::once("timed-quiz").chain(args.iter().copied());
        CliOptions::try_parse_from(args).unwrap().into()
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let from_cli = parse(&[]);
        let default = Settings::default();
        assert_eq!(from_cli.problems_path, default.problems_path);
        assert_eq!(from_cli.shuffle, default.shuffle);
        assert_eq!(from_cli.seed, default.seed);
        assert_eq!(from_cli.quiz.time_limit, default.quiz.time_limit);
    }

    #[test]
    fn reads_every_flag() {
        let settings = parse(&[
            "--file",
            "capitals.csv",
            "--shuffle",
            "false",
            "--timer",
            "30",
            "--seed",
            "42",
        ]);
        assert_eq!(settings.problems_path, PathBuf::from("capitals.csv"));
        assert!(!settings.shuffle);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.quiz.time_limit, Duration::from_secs(30));
    }

    #[test]
    fn rejects_zero_timer() {
        assert!(CliOptions::try_parse_from(["timed-quiz", "--timer", "0"]).is_err());
    }
}
