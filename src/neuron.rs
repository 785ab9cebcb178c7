use log::info;
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};
use simple_error::{try_with, SimpleError, SimpleResult};

use crate::{
    params::{self, BiasUpdate, NeuronParams},
    snapshot::Snapshot,
    util::round_3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronState {
    Untrained,
    Trained,
}

#[derive(Debug, Clone)]
pub struct Neuron {
    name: String,
    pub(crate) weights: Vec<f64>,
    pub(crate) bias: f64,
    learning_rate: f64,
    bias_update: BiasUpdate,
    pub(crate) state: NeuronState,
}

impl Neuron {
    /// Draws the weights and the bias uniformly from `random_range`.
    pub fn new(name: &str, neuron_params: &NeuronParams) -> SimpleResult<Self> {
        try_with!(
            params::validate_neuron_params(neuron_params),
            "invalid neuron parameters"
        );

        let mut rng = match neuron_params.seed_override {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (low, high) = neuron_params.random_range;
        let dist = Uniform::new_inclusive(low, high);

        let bias = round_3(dist.sample(&mut rng));
        let weights = (0..neuron_params.input_count)
            .map(|_| round_3(dist.sample(&mut rng)))
            .collect();

        Ok(Self {
            name: name.to_string(),
            weights,
            bias,
            learning_rate: neuron_params.learning_rate,
            bias_update: neuron_params.bias_update,
            state: NeuronState::Untrained,
        })
    }

    pub fn with_parameters(
        name: &str,
        weights: Vec<f64>,
        bias: f64,
        learning_rate: f64,
        bias_update: BiasUpdate,
    ) -> SimpleResult<Self> {
        if weights.is_empty() {
            return Err(SimpleError::new("weights must not be empty"));
        }

        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(SimpleError::new("learning_rate must be strictly positive"));
        }

        Ok(Self {
            name: name.to_string(),
            weights: weights.into_iter().map(round_3).collect(),
            bias: round_3(bias),
            learning_rate,
            bias_update,
            state: NeuronState::Untrained,
        })
    }

    pub fn weighted_sum(&self, inputs: &[f64]) -> SimpleResult<f64> {
        if inputs.len() != self.weights.len() {
            return Err(SimpleError::new(format!(
                "expected {} inputs, got {}",
                self.weights.len(),
                inputs.len()
            )));
        }

        let mut z = 0.0;
        for (weight, input) in self.weights.iter().zip(inputs) {
            z += weight * input;
        }

        Ok(round_3(z + self.bias))
    }

    /// Step activation. The threshold is the negated current bias, so it moves
    /// with the bias during training.
    pub fn activate(&self, z: f64) -> u8 {
        if z >= -self.bias {
            1
        } else {
            0
        }
    }

    pub fn forward(&self, inputs: &[f64]) -> SimpleResult<u8> {
        Ok(self.activate(self.weighted_sum(inputs)?))
    }

    pub fn infer(&self, input_rows: &[Vec<f64>]) -> SimpleResult<Vec<u8>> {
        let mut result = Vec::with_capacity(input_rows.len());

        for inputs in input_rows {
            let prediction = self.forward(inputs)?;
            info!("{}: result for {:?}: {}", self.name, inputs, prediction);
            result.push(prediction);
        }

        Ok(result)
    }

    pub fn snapshot(&self, epoch: usize) -> Snapshot {
        Snapshot {
            epoch,
            weights: self.weights.clone(),
            bias: self.bias,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn bias_update(&self) -> BiasUpdate {
        self.bias_update
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    pub fn state(&self) -> NeuronState {
        self.state
    }

    pub fn is_trained(&self) -> bool {
        self.state == NeuronState::Trained
    }
}
