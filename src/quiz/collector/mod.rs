use std::io::BufRead;

use crate::error::ReadError;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Answer {
    Line(String),
    EndOfInput,
}

/// Produces one answer per call. A call blocks until the user submits a line or the
/// input ends, and cannot be interrupted from the outside once it has started.
pub trait AnswerCollector: Send + 'static {
    fn collect_one(&mut self) -> Result<Answer, ReadError>;
}

pub struct LineCollector<R> {
    input: R,
}

impl<R: BufRead> LineCollector<R> {
    pub fn new(input: R) -> Self {
        LineCollector { input }
    }
}

impl<R: BufRead + Send + 'static> AnswerCollector for LineCollector<R> {
    fn collect_one(&mut self) -> Result<Answer, ReadError> {
        let mut line = Vec::new();
        let bytes_read = self.input.read_until(b'\n', &mut line)?;
        if bytes_read == 0 {
            return Ok(Answer::EndOfInput);
        }
        // Undecodable bytes are still an answer, just one that cannot match.
        Ok(Answer::Line(String::from_utf8_lossy(&line).trim().to_owned()))
    }
}
