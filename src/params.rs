use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

use crate::dataset::LogicFunction;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasUpdate {
    /// The bias is overwritten by the latest delta, weights still accumulate.
    #[default]
    Replace,
    Accumulate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronParams {
    pub random_range: (f64, f64),
    pub learning_rate: f64,
    pub input_count: usize,
    pub bias_update: BiasUpdate,
    pub seed_override: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerParams {
    /// `None` trains until convergence, which never happens on a dataset that
    /// is not linearly separable.
    pub max_epochs: Option<usize>,
    pub epoch_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub neuron_params: NeuronParams,
    pub trainer_params: TrainerParams,
    pub functions: Vec<LogicFunction>,
    pub probe_inputs: Vec<u8>,
}

impl Default for NeuronParams {
    fn default() -> Self {
        Self {
            random_range: (-1.0, 1.0),
            learning_rate: 0.1,
            input_count: 2,
            bias_update: BiasUpdate::default(),
            seed_override: None,
        }
    }
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            max_epochs: Some(10_000),
            epoch_delay_ms: 200,
        }
    }
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            neuron_params: NeuronParams::default(),
            trainer_params: TrainerParams::default(),
            functions: vec![LogicFunction::And, LogicFunction::Or],
            probe_inputs: vec![0, 0, 0, 1, 1, 0, 1, 1],
        }
    }
}

pub fn validate_scenario_params(scenario_params: &ScenarioParams) -> Result<(), SimpleError> {
    validate_neuron_params(&scenario_params.neuron_params)?;
    validate_trainer_params(&scenario_params.trainer_params)?;

    if scenario_params.functions.is_empty() {
        return Err(SimpleError::new("functions must not be empty"));
    }

    for function in &scenario_params.functions {
        if function.input_count() != scenario_params.neuron_params.input_count {
            return Err(SimpleError::new(format!(
                "function {} requires {} inputs, but input_count is {}",
                function,
                function.input_count(),
                scenario_params.neuron_params.input_count
            )));
        }
    }

    if scenario_params.probe_inputs.len() % scenario_params.neuron_params.input_count != 0 {
        return Err(SimpleError::new(
            "probe_inputs length must be a multiple of input_count",
        ));
    }

    Ok(())
}

pub fn validate_neuron_params(neuron_params: &NeuronParams) -> Result<(), SimpleError> {
    if !neuron_params.learning_rate.is_finite() || neuron_params.learning_rate <= 0.0 {
        return Err(SimpleError::new("learning_rate must be strictly positive"));
    }

    let (low, high) = neuron_params.random_range;

    if !low.is_finite() || !high.is_finite() {
        return Err(SimpleError::new("random_range bounds must be finite"));
    }

    if low > high {
        return Err(SimpleError::new(
            "random_range low must not be greater than high",
        ));
    }

    if !(high - low).is_finite() {
        return Err(SimpleError::new("random_range width must be finite"));
    }

    if neuron_params.input_count == 0 {
        return Err(SimpleError::new("input_count must be strictly positive"));
    }

    Ok(())
}

pub fn validate_trainer_params(trainer_params: &TrainerParams) -> Result<(), SimpleError> {
    if trainer_params.max_epochs == Some(0) {
        return Err(SimpleError::new("max_epochs must be strictly positive"));
    }

    Ok(())
}
