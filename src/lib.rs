pub mod config;
pub mod error;
pub mod factory;
pub mod host;
pub mod models;
pub mod notifier;
pub mod random;
pub mod sky;

pub use config::{Config, ConfigError};
pub use error::{SnapshotError, StarError};
pub use factory::{stars_from_snapshot, to_snapshot, StarFactory};
pub use host::{run_command, Command, Control};
pub use models::{status_text, AddOutcome, ChangeReport, Star, StarSummary};
pub use notifier::{ChangeNotifier, SnapshotCache};
pub use random::{RandomSource, RngSource};
pub use sky::{Sky, DEFAULT_CAPACITY};
