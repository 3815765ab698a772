use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use super::{Answer, AnswerCollector};
use crate::error::ReadError;

pub enum Step {
    Line(String),
    SlowLine(Duration, String),
    Fail,
}

/// Replays a fixed script of user input. Runs out into end-of-input.
#[derive(Default)]
pub struct ScriptedCollector {
    steps: VecDeque<Step>,
}

impl ScriptedCollector {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn line(mut self, text: &str) -> Self {
        self.steps.push_back(Step::Line(text.to_owned()));
        self
    }

    pub fn slow_line(mut self, delay: Duration, text: &str) -> Self {
        self.steps.push_back(Step::SlowLine(delay, text.to_owned()));
        self
    }

    pub fn fail(mut self) -> Self {
        self.steps.push_back(Step::Fail);
        self
    }
}

impl AnswerCollector for ScriptedCollector {
    fn collect_one(&mut self) -> Result<Answer, ReadError> {
        match self.steps.pop_front() {
            Some(Step::Line(text)) => Ok(Answer::Line(text.trim().to_owned())),
            Some(Step::SlowLine(delay, text)) => {
                thread::sleep(delay);
                Ok(Answer::Line(text.trim().to_owned()))
            }
            Some(Step::Fail) => Err(ReadError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "scripted failure",
            ))),
            None => Ok(Answer::EndOfInput),
        }
    }
}
