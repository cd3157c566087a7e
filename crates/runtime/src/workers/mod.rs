//! Background tasks internal to the runtime.

mod simulation;

pub(crate) use simulation::{Command, SimulationWorker};
