use crate::quiz::definition::ProblemSet;

/// An answer the user submitted before the session ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    pub problem_index: usize,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ending {
    /// Every problem was answered before the deadline.
    Exhausted,
    TimedOut,
    /// Input closed or failed before the quiz was over.
    Aborted,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub ending: Ending,
    pub total_questions: usize,
    pub attempted: usize,
    pub correct: usize,
    pub incorrect: usize,
}

impl Outcome {
    /// Unanswered problems count neither as correct nor as incorrect.
    pub fn tally(problems: &ProblemSet, responses: &[Response], ending: Ending) -> Self {
        let correct = responses
            .iter()
            .filter(|r| {
                problems
                    .get(r.problem_index)
                    .map_or(false, |p| p.is_answer_correct(&r.text))
            })
            .count();
        Outcome {
            ending,
            total_questions: problems.len(),
            attempted: responses.len(),
            correct,
            incorrect: responses.len() - correct,
        }
    }
}
