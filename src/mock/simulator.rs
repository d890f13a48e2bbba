//! Caller-owned recurring update task for the live batch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::generator::MockGenerator;

/// Drives [`MockGenerator::update_live_games`] on a fixed interval.
///
/// The updater never starts itself: the caller constructs it, calls
/// [`start`], and keeps the returned [`UpdaterHandle`] to stop the cadence.
/// Dropping the handle aborts the task.
///
/// [`start`]: LiveUpdater::start
pub struct LiveUpdater {
    generator: Arc<MockGenerator>,
    interval: Duration,
}

impl LiveUpdater {
    pub fn new(generator: Arc<MockGenerator>, interval: Duration) -> Self {
        Self {
            generator,
            interval,
        }
    }

    /// Spawn the recurring update task. The first pass runs immediately.
    pub fn start(self) -> UpdaterHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let generator = self.generator;
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        generator.update_live_games().await;
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            debug!("live updater stopped");
        });

        UpdaterHandle {
            task: Some(task),
            shutdown: shutdown_tx,
        }
    }
}

pub struct UpdaterHandle {
    task: Option<JoinHandle<()>>,
    shutdown: watch::Sender<bool>,
}

impl UpdaterHandle {
    /// Signal the task to stop and wait for it to finish.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map(JoinHandle::is_finished).unwrap_or(true)
    }
}

impl Drop for UpdaterHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::mock::{GeneratorConfig, TeamCatalog};

    fn quiet_generator(seed: u64) -> Arc<MockGenerator> {
        Arc::new(MockGenerator::with_config(
            &TeamCatalog::builtin(),
            GeneratorConfig {
                seed: Some(seed),
                latency: Duration::ZERO,
                clock: Arc::new(SystemClock),
            },
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_updater_runs_on_interval() {
        let generator = quiet_generator(17);
        let before = generator.live_games(None).await;

        let handle = LiveUpdater::new(generator.clone(), Duration::from_secs(1)).start();
        tokio::time::sleep(Duration::from_millis(5500)).await;
        handle.stop().await;

        let after = generator.live_games(None).await;
        let changed = before
            .iter()
            .zip(after.iter())
            .any(|(b, a)| b.score != a.score || b.clock != a.clock);
        assert!(changed, "several ticks should mutate the live batch");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_updates() {
        let generator = quiet_generator(29);
        let handle = LiveUpdater::new(generator.clone(), Duration::from_secs(1)).start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.stop().await;

        let frozen = generator.live_games(None).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(frozen, generator.live_games(None).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_aborts_task() {
        let generator = quiet_generator(31);
        let handle = LiveUpdater::new(generator, Duration::from_secs(1)).start();
        drop(handle);
        // Nothing to assert beyond "no panic"; the abort lands on drop.
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
}
