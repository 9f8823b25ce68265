//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
///
/// Environment variables:
/// - `SORTEO_DATA_DIR` - Snapshot directory (default: platform data dir)
/// - `SORTEO_REVEAL_MS` - Draw reveal delay in milliseconds (default: 1500)
/// - `SORTEO_SEED` - Fixed RNG seed for reproducible sessions
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub reveal_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("SORTEO_DATA_DIR").ok().map(PathBuf::from),
            // Clamp so the settlement stays observable as a deferred step.
            reveal_ms: read_env::<u64>("SORTEO_REVEAL_MS").map(|ms| ms.max(100)),
            seed: read_env::<u64>("SORTEO_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
