use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};
use crate::quiz::outcome::Outcome;

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::take(&mut *self.messages.write())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn questions_asked(&self) -> usize {
        self.messages
            .read()
            .iter()
            .filter(|m| matches!(m, Message::Question { .. }))
            .count()
    }

    pub fn results(&self) -> Vec<Outcome> {
        self.messages
            .read()
            .iter()
            .filter_map(|m| match m {
                Message::Results(outcome) => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
