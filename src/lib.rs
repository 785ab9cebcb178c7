pub mod dataset;
pub mod neuron;
pub mod observer;
pub mod params;
pub mod snapshot;
pub mod trainer;

mod util;
