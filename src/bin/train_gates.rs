use std::fs;
use std::process;
use std::sync::mpsc::channel as mpsc_channel;

use perceptron::{
    dataset,
    neuron::Neuron,
    observer,
    params::{self, ScenarioParams},
    trainer::Trainer,
};
use simple_error::{try_with, SimpleResult};

#[path = "../scenario_params.rs"]
mod scenario_params;

fn load_scenario_params() -> SimpleResult<ScenarioParams> {
    let params = match std::env::args().nth(1) {
        Some(path) => {
            let yaml = try_with!(
                fs::read_to_string(&path),
                &format!("cannot read {}", path)
            );
            try_with!(
                serde_yaml::from_str::<ScenarioParams>(&yaml),
                &format!("cannot parse {}", path)
            )
        }
        None => scenario_params::get_scenario_params(),
    };

    try_with!(
        params::validate_scenario_params(&params),
        "invalid scenario parameters"
    );

    Ok(params)
}

fn run(params: &ScenarioParams) -> SimpleResult<()> {
    let trainer = Trainer::new(&params.trainer_params)?;
    let probe_rows =
        dataset::parse_input_rows(&params.probe_inputs, params.neuron_params.input_count)?;

    for function in &params.functions {
        let name = function.to_string();
        let mut neuron = Neuron::new(&name, &params.neuron_params)?;
        let training_set = function.dataset();

        println!("Neuron {}: training", name);

        let (tx, rx) = mpsc_channel();
        let label = name.clone();
        let observer_handle = observer::spawn_observer(rx, move |snapshot| {
            println!(
                "{} epoch {}: W: {:?}  B: {}",
                label, snapshot.epoch, snapshot.weights, snapshot.bias
            );
        });

        let outcome = trainer.train(&mut neuron, &training_set, Some(&tx))?;
        drop(tx);
        if observer_handle.join().is_err() {
            eprintln!("Error: observer thread for {} panicked", name);
        }

        if outcome.is_converged() {
            println!("Neuron {}: trained after {} epochs", name, outcome.epochs());
        } else {
            println!(
                "Neuron {}: no convergence within {} epochs",
                name,
                outcome.epochs()
            );
        }

        let predictions = neuron.infer(&probe_rows)?;

        for (inputs, prediction) in probe_rows.iter().zip(&predictions) {
            println!("...result for {:?}: {}", inputs, prediction);
        }

        let snapshot_json = try_with!(
            serde_json::to_string(&neuron.snapshot(outcome.epochs())),
            "cannot serialize snapshot"
        );
        println!("...final snapshot: {}", snapshot_json);
    }

    Ok(())
}

fn main() {
    let result = load_scenario_params().and_then(|params| run(&params));

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
