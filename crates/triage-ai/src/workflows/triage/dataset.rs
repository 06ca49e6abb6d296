use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Agent, Assignment, Ticket};

/// Errors raised while reading the dataset or persisting assignments.
/// Either one aborts the batch before partial output can appear.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Agent roster and ticket queue for one allocation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageDataset {
    pub agents: Vec<Agent>,
    pub tickets: Vec<Ticket>,
}

impl TriageDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_reader(reader)?;
        info!(
            agents = dataset.agents.len(),
            tickets = dataset.tickets.len(),
            "loaded triage dataset"
        );
        Ok(dataset)
    }
}

/// Envelope persisted after a successful batch: `{"assignments": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentsFile {
    pub assignments: Vec<Assignment>,
}

impl AssignmentsFile {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DatasetError> {
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!(
            path = %path.as_ref().display(),
            assignments = self.assignments.len(),
            "assignment results saved"
        );
        Ok(())
    }

    /// Pretty-printed JSON so the artifact stays reviewable in diffs.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), DatasetError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
