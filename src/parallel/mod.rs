pub mod batch;
pub mod pool;

pub use batch::{calc_scenarios, calc_scenarios_with};
pub use pool::{WorkerPool, WORKERS_ENV};
