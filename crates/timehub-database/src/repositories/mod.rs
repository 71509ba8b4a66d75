//! PostgreSQL implementations of the store traits.

pub mod log;
pub mod settings;
pub mod timer;

pub use log::LogRepository;
pub use settings::SettingsRepository;
pub use timer::TimerRepository;
