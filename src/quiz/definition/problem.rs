use serde::Deserialize;

/// Decides whether a typed answer matches the expected one.
/// Surrounding whitespace and letter case are ignored on both sides.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[derive(Deserialize)]
pub struct RawProblem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    #[cfg(test)]
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, answer: A) -> Self {
        Problem {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn is_answer_correct(&self, answer: &str) -> bool {
        answers_match(answer, &self.answer)
    }
}

impl From<RawProblem> for Problem {
    fn from(raw_problem: RawProblem) -> Self {
        Problem {
            question: raw_problem.question,
            answer: raw_problem.answer,
        }
    }
}
