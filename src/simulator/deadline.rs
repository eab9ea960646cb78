//! Wall-clock deadline around any simulator.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::error::SimulationError;
use super::trajectory::Trajectory;
use super::Simulator;
use crate::scenario::Obstacle;

/// Runs the wrapped simulator on a worker thread and gives up after
/// `deadline`.
///
/// A run that misses its deadline is reported as
/// [`SimulationError::Timeout`]. The worker is detached and its late
/// result is discarded.
///
/// Every run gets its own worker and a timed-out worker is never stopped.
/// A simulator that keeps hanging therefore leaves one live thread per
/// missed deadline until it returns. Later runs do not wait for them.
#[derive(Debug)]
pub struct DeadlineSimulator<S> {
    inner: Arc<S>,
    deadline: Duration,
}

impl<S> DeadlineSimulator<S> {
    /// Wrap `inner` with a per-run deadline
    pub fn new(inner: S, deadline: Duration) -> Self {
        Self { inner: Arc::new(inner), deadline }
    }

    /// The configured deadline
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl<S> Simulator for DeadlineSimulator<S>
where
    S: Simulator + Send + Sync + 'static,
    S::Mission: Clone + Send + 'static,
{
    type Mission = S::Mission;

    fn execute(
        &self,
        mission: &Self::Mission,
        obstacles: &[Obstacle],
    ) -> Result<Trajectory, SimulationError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let mission = mission.clone();
        let obstacles = obstacles.to_vec();

        thread::Builder::new()
            .name("esquiva-sim".into())
            .spawn(move || {
                let _ = tx.send(inner.execute(&mission, &obstacles));
            })
            .map_err(|e| {
                SimulationError::Crashed(format!("failed to spawn simulator thread: {e}"))
            })?;

        match rx.recv_timeout(self.deadline) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(SimulationError::Timeout(self.deadline)),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(SimulationError::Crashed("simulator thread panicked".into()))
            }
        }
    }
}
