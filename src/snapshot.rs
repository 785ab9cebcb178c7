use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub epoch: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingOutcome {
    Converged { epochs: usize },
    EpochLimitReached { epochs: usize },
}

impl TrainingOutcome {
    pub fn epochs(&self) -> usize {
        match *self {
            TrainingOutcome::Converged { epochs } => epochs,
            TrainingOutcome::EpochLimitReached { epochs } => epochs,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, TrainingOutcome::Converged { .. })
    }
}

/// Message sent from the training thread to an observer. `Finished` is always
/// the last message of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Progress {
    Epoch(Snapshot),
    Finished(TrainingOutcome),
}
