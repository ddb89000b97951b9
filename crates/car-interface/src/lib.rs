//! Car Interface
//!
//! One control-loop cycle: decoded bus readings go through the state
//! builder, the resulting snapshot through the safety event engine, and the
//! caller gets both back. Actuation is requested separately against the most
//! recent snapshot.

mod interface;
mod longitudinal;
mod settings;

pub use interface::{CarInterface, CarStateOutput};
pub use longitudinal::{calc_accel_override, compute_gb};
pub use settings::ReplayConfig;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
