pub mod action;
pub mod model;

pub use action::StopAction;
pub use model::TimeLog;
