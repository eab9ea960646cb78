//! Mission simulation.
//!
//! The search treats the simulator as a black box: it hands over the
//! mission and the current obstacle list and receives the flown
//! trajectory or a failure.

mod deadline;
mod error;
mod trajectory;
mod waypoint;

pub use deadline::DeadlineSimulator;
pub use error::SimulationError;
pub use trajectory::Trajectory;
pub use waypoint::{Avoidance, FlightPlan, WaypointSimulator};

use crate::scenario::Obstacle;

/// Executes a mission in a world containing `obstacles`
pub trait Simulator {
    /// Mission description understood by this simulator
    type Mission;

    /// Fly `mission` once and return the recorded trajectory
    fn execute(
        &self,
        mission: &Self::Mission,
        obstacles: &[Obstacle],
    ) -> Result<Trajectory, SimulationError>;
}

impl<S: Simulator + ?Sized> Simulator for &S {
    type Mission = S::Mission;

    fn execute(
        &self,
        mission: &Self::Mission,
        obstacles: &[Obstacle],
    ) -> Result<Trajectory, SimulationError> {
        (**self).execute(mission, obstacles)
    }
}
