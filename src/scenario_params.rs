use perceptron::params::ScenarioParams;

pub fn get_scenario_params() -> ScenarioParams {
    let params_yaml_str = r#"
neuron_params:
  random_range: [-1.0, 1.0]
  learning_rate: 0.1
  input_count: 2
  bias_update: Replace
  seed_override: null
trainer_params:
  max_epochs: 10000
  epoch_delay_ms: 200
functions:
- And
- Or
probe_inputs: [0, 0, 0, 1, 1, 0, 1, 1]
"#;

    serde_yaml::from_str(params_yaml_str).unwrap()
}
