pub mod model;

pub use model::CardSettings;
