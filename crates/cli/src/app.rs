//! Glue code tying the session runtime, snapshot store, and terminal UI
//! together.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use sorteo_runtime::{
    FileSnapshotRepo, InMemorySnapshotRepo, Runtime, RuntimeConfig, SnapshotRepository,
};

use crate::config::CliConfig;
use crate::event_loop::EventLoop;
use crate::presentation::terminal;

pub struct CliApp {
    config: CliConfig,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("sorteo starting...");

        let mut runtime_config = RuntimeConfig {
            seed: self.config.seed,
            ..RuntimeConfig::default()
        };
        if let Some(ms) = self.config.reveal_ms {
            runtime_config.reveal_delay = Duration::from_millis(ms);
        }

        let repository = self.open_repository();

        let runtime = Runtime::builder()
            .config(runtime_config)
            .repository(repository)
            .build()?;

        let event_loop = EventLoop::new(runtime.handle()).await?;

        let mut term = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut term).await;

        terminal::restore()?;
        runtime.shutdown().await?;

        tracing::info!("sorteo exiting");
        result
    }

    /// Open the snapshot store: the configured directory, falling back to the
    /// platform data dir, falling back to an ephemeral in-memory store.
    fn open_repository(&self) -> Arc<dyn SnapshotRepository> {
        let dir = self
            .config
            .data_dir
            .clone()
            .or_else(FileSnapshotRepo::default_base_dir);

        match dir {
            Some(dir) => match FileSnapshotRepo::new(&dir) {
                Ok(repo) => {
                    tracing::info!("snapshots stored under {}", dir.display());
                    Arc::new(repo)
                }
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        "snapshot dir unavailable, roster will not persist"
                    );
                    Arc::new(InMemorySnapshotRepo::new())
                }
            },
            None => {
                tracing::warn!("no data dir resolved, roster will not persist");
                Arc::new(InMemorySnapshotRepo::new())
            }
        }
    }
}
