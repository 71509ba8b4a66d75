pub mod model;

pub use model::ActiveTimer;
