use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use log::{debug, info, trace, warn};
use simple_error::{try_with, SimpleError, SimpleResult};

use crate::{
    dataset::Dataset,
    neuron::{Neuron, NeuronState},
    params::{self, BiasUpdate, TrainerParams},
    snapshot::{Progress, TrainingOutcome},
    util::round_3,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub bias: f64,
    pub weights: Vec<f64>,
}

pub fn error(desired: u8, predicted: u8) -> i8 {
    desired as i8 - predicted as i8
}

pub fn compute_update(inputs: &[f64], error: i8, learning_rate: f64) -> Update {
    let step = learning_rate * error as f64;

    Update {
        bias: step,
        weights: inputs.iter().map(|x| x * step).collect(),
    }
}

pub fn apply_update(neuron: &mut Neuron, update: &Update) {
    neuron.bias = match neuron.bias_update() {
        BiasUpdate::Replace => round_3(update.bias),
        BiasUpdate::Accumulate => round_3(neuron.bias + update.bias),
    };

    for (weight, delta) in neuron.weights.iter_mut().zip(&update.weights) {
        *weight = round_3(*weight + delta);
    }
}

/// One online pass: each misclassified example updates the neuron before the
/// next example is evaluated. Returns whether any update happened.
pub fn run_epoch(neuron: &mut Neuron, dataset: &Dataset) -> SimpleResult<bool> {
    let mut updated = false;

    for example in dataset.iter() {
        let predicted = neuron.forward(example.inputs())?;
        let error = error(example.desired(), predicted);

        if error != 0 {
            let update = compute_update(example.inputs(), error, neuron.learning_rate());
            trace!(
                "{}: inputs {:?}, error {}, update {:?}",
                neuron.name(),
                example.inputs(),
                error,
                update
            );
            apply_update(neuron, &update);
            updated = true;
        }
    }

    Ok(updated)
}

#[derive(Debug, Clone)]
pub struct Trainer {
    max_epochs: Option<usize>,
    epoch_delay: Duration,
}

impl Trainer {
    pub fn new(trainer_params: &TrainerParams) -> SimpleResult<Self> {
        try_with!(
            params::validate_trainer_params(trainer_params),
            "invalid trainer parameters"
        );

        Ok(Self {
            max_epochs: trainer_params.max_epochs,
            epoch_delay: Duration::from_millis(trainer_params.epoch_delay_ms),
        })
    }

    /// Runs epochs until one makes no update or the epoch ceiling is hit. With an
    /// observer, every epoch is followed by a snapshot and the run ends with
    /// `Progress::Finished`.
    pub fn train(
        &self,
        neuron: &mut Neuron,
        dataset: &Dataset,
        observer: Option<&Sender<Progress>>,
    ) -> SimpleResult<TrainingOutcome> {
        if dataset.input_count() != neuron.input_count() {
            return Err(SimpleError::new(format!(
                "dataset has {} inputs per example, but neuron has {} weights",
                dataset.input_count(),
                neuron.input_count()
            )));
        }

        info!(
            "{}: training on {} examples, weights {:?}, bias {}",
            neuron.name(),
            dataset.len(),
            neuron.weights(),
            neuron.bias()
        );

        let mut observer = observer;
        let mut epoch = 0;

        let outcome = loop {
            if let Some(max_epochs) = self.max_epochs {
                if epoch >= max_epochs {
                    break TrainingOutcome::EpochLimitReached { epochs: epoch };
                }
            }

            let updated = run_epoch(neuron, dataset)?;
            epoch += 1;

            match observer {
                Some(tx) => {
                    if tx.send(Progress::Epoch(neuron.snapshot(epoch))).is_err() {
                        warn!("{}: observer disconnected", neuron.name());
                        observer = None;
                    }
                }
                None => debug!(
                    "{}: epoch {}: weights {:?}, bias {}",
                    neuron.name(),
                    epoch,
                    neuron.weights(),
                    neuron.bias()
                ),
            }

            if !self.epoch_delay.is_zero() {
                thread::sleep(self.epoch_delay);
            }

            if !updated {
                break TrainingOutcome::Converged { epochs: epoch };
            }
        };

        match outcome {
            TrainingOutcome::Converged { epochs } => {
                neuron.state = NeuronState::Trained;
                info!("{}: converged after {} epochs", neuron.name(), epochs);
            }
            TrainingOutcome::EpochLimitReached { epochs } => {
                warn!(
                    "{}: no convergence within {} epochs, dataset might not be linearly separable",
                    neuron.name(),
                    epochs
                );
            }
        }

        if let Some(tx) = observer {
            tx.send(Progress::Finished(outcome)).ok();
        }

        Ok(outcome)
    }
}
