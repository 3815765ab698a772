use log::error;
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

use crate::output::{Message, QuizOutput};
use crate::quiz::outcome::Ending;

pub struct TerminalOutput<W> {
    writer: Mutex<W>,
}

impl TerminalOutput<Stdout> {
    pub fn stdout() -> Self {
        TerminalOutput::new(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput {
            writer: Mutex::new(writer),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            StartGate(total) => format!(
                "📋 This quiz has {} questions.\nPress [Enter] to start the quiz!\n",
                total
            ),
            Question {
                number,
                total,
                text,
            } => format!("Question {}/{}: {}\nYour answer: ", number, total, text),
            TimeUp => "\n\n⏰ Time's up!\n".into(),
            InputClosed => "\nNo more input, ending the quiz.\n".into(),
            Results(outcome) => {
                let mut message = String::new();
                if outcome.ending == Ending::Exhausted {
                    message += "\n🎊 You made it through every question!\n";
                }
                message += &format!(
                    "You answered {} out of {} attempted questions correctly ({} wrong, {} questions total).\n",
                    outcome.correct, outcome.attempted, outcome.incorrect, outcome.total_questions
                );
                message
            }
        }
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn say(&self, message: &Message) {
        let text = Self::interpret_message(message);
        let mut writer = self.writer.lock();
        if let Err(e) = writer.write_all(text.as_bytes()).and_then(|_| writer.flush()) {
            error!("Could not write to terminal: {}", e);
        }
    }
}
