use log::{debug, info, warn};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;

use self::collector::{Answer, AnswerCollector};
use self::deadline::Deadline;
use self::definition::ProblemSet;
use self::outcome::{Ending, Outcome, Response};
use crate::error::ReadError;
use crate::output::{Message, QuizOutput};

pub mod collector;
pub mod deadline;
pub mod definition;
pub mod outcome;
mod settings;

pub use self::settings::Settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    NotStarted,
    Running,
    Ended(Ending),
    Reported,
}

type PendingAnswer = oneshot::Receiver<Result<Answer, ReadError>>;

/// Drives one quiz session: asks every problem in order, racing each answer against a
/// shared deadline, then reports the tally exactly once.
pub struct Quiz<C, O> {
    problems: ProblemSet,
    settings: Settings,
    collector: Arc<Mutex<C>>,
    output: O,
    current_phase: Phase,
    responses: Vec<Response>,
}

impl<C: AnswerCollector, O: QuizOutput> Quiz<C, O> {
    pub fn new(problems: ProblemSet, settings: Settings, collector: C, output: O) -> Self {
        Quiz {
            problems,
            settings,
            collector: Arc::new(Mutex::new(collector)),
            output,
            current_phase: Phase::NotStarted,
            responses: Vec::new(),
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Quiz phase: {:?} -> {:?}", self.current_phase, phase);
        self.current_phase = phase;
    }

    /// Runs the session to completion and reports the tally. Input problems end the
    /// session early instead of failing it.
    pub async fn run(mut self) -> Outcome {
        let ending = self.play().await;
        self.set_current_phase(Phase::Ended(ending));

        let outcome = Outcome::tally(&self.problems, &self.responses, ending);
        self.output.say(&Message::Results(outcome.clone()));
        self.set_current_phase(Phase::Reported);
        outcome
    }

    async fn play(&mut self) -> Ending {
        self.output.say(&Message::StartGate(self.problems.len()));
        let gate = self.read_answer().await;
        if let Some(ending) = self.check_input(&gate) {
            return ending;
        }

        // The countdown starts when the user is ready, not when the process starts.
        let mut deadline = Deadline::start(self.settings.time_limit);
        self.set_current_phase(Phase::Running);
        let ending = self.ask_questions(&mut deadline).await;
        deadline.stop();
        ending
    }

    async fn ask_questions(&mut self, deadline: &mut Deadline) -> Ending {
        let total = self.problems.len();
        for (problem_index, problem) in self.problems.iter().enumerate() {
            if deadline.is_expired() {
                return self.time_up();
            }

            self.output.say(&Message::Question {
                number: problem_index + 1,
                total,
                text: problem.question.clone(),
            });
            let pending = self.read_answer();

            tokio::select! {
                biased;
                _ = deadline.expired() => {
                    // The pending read is abandoned; whatever it yields later is dropped.
                    return self.time_up();
                }
                answer = pending => {
                    if let Some(ending) = self.check_input(&answer) {
                        return ending;
                    }
                    if let Ok(Answer::Line(text)) = answer {
                        self.responses.push(Response { problem_index, text });
                    }
                }
            }
        }
        Ending::Exhausted
    }

    fn time_up(&self) -> Ending {
        self.output.say(&Message::TimeUp);
        Ending::TimedOut
    }

    /// Turns end-of-input and read failures into an aborted session.
    fn check_input(&self, answer: &Result<Answer, ReadError>) -> Option<Ending> {
        match answer {
            Ok(Answer::Line(_)) => None,
            Ok(Answer::EndOfInput) => {
                info!("Input closed, ending the quiz");
                self.output.say(&Message::InputClosed);
                Some(Ending::Aborted)
            }
            Err(e) => {
                warn!("Could not read answer: {}", e);
                self.output.say(&Message::InputClosed);
                Some(Ending::Aborted)
            }
        }
    }

    /// Issues one blocking read on its own thread. The read cannot be cancelled, so the
    /// thread is detached and its result only counts if someone is still waiting for it.
    fn spawn_read(&self) -> PendingAnswer {
        let (sender, receiver) = oneshot::channel();
        let collector = Arc::clone(&self.collector);
        let spawned = thread::Builder::new()
            .name("answer-collector".to_owned())
            .spawn(move || {
                let answer = collector.lock().collect_one();
                let _ = sender.send(answer);
            });
        if let Err(e) = spawned {
            warn!("Could not spawn answer collector: {}", e);
        }
        receiver
    }

    fn read_answer(&self) -> impl Future<Output = Result<Answer, ReadError>> {
        let pending = self.spawn_read();
        async move { pending.await.unwrap_or(Err(ReadError::CollectorLost)) }
    }
}
