use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::Path;

use crate::error::DataFormatError;

pub mod problem;

#[cfg(test)]
pub use problem::answers_match;
pub use problem::{Problem, RawProblem};


const FIELDS_PER_RECORD: usize = 2;

/// The ordered list of problems for one session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    #[cfg(test)]
    pub fn new(problems: Vec<Problem>) -> Self {
        ProblemSet { problems }
    }

    pub fn open(source: &Path) -> Result<ProblemSet, DataFormatError> {
        let file = File::open(source).map_err(|e| DataFormatError::Open {
            path: source.to_path_buf(),
            source: e,
        })?;
        ProblemSet::from_reader(file)
    }

    /// Reads header-less CSV where every record is exactly `question,answer`.
    /// A single malformed record rejects the whole set.
    pub fn from_reader<R: Read>(reader: R) -> Result<ProblemSet, DataFormatError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut problems = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            if record.len() != FIELDS_PER_RECORD {
                return Err(DataFormatError::FieldCount {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    found: record.len(),
                });
            }
            let raw_problem: RawProblem = record.deserialize(None)?;
            problems.push(raw_problem.into());
        }

        Ok(ProblemSet { problems })
    }

    /// Returns the same problems in a uniformly random order (Fisher-Yates over the whole set).
    pub fn shuffle<R: Rng + ?Sized>(mut self, rng: &mut R) -> ProblemSet {
        self.problems.shuffle(rng);
        self
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }
}

impl Index<usize> for ProblemSet {
    type Output = Problem;

    fn index(&self, index: usize) -> &Problem {
        &self.problems[index]
    }
}
