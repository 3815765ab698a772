use crate::quiz::outcome::Outcome;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use terminal::TerminalOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    StartGate(usize),
    Question {
        number: usize,
        total: usize,
        text: String,
    },
    TimeUp,
    InputClosed,
    Results(Outcome),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
