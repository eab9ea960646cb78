//! Reference kinematic simulator.
//!
//! The drone flies straight between waypoints at constant speed. Near an
//! obstacle a bounded avoidance term pushes it away from the closest face
//! and slides it along the face in its direction of travel, so obstacles
//! on the path produce near-misses rather than guaranteed collisions.
//! The model is deterministic: the same plan and obstacles always give the
//! same trajectory.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use super::trajectory::Trajectory;
use super::Simulator;
use crate::geometry::{Point3, Vec2};
use crate::scenario::Obstacle;

/// Reactive avoidance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avoidance {
    /// Distance at which obstacles start to repel the drone
    pub influence_radius: f64,
    /// Strength of the avoidance step relative to the cruise step
    pub gain: f64,
}

impl Default for Avoidance {
    fn default() -> Self {
        Self { influence_radius: 3.0, gain: 1.5 }
    }
}

fn default_speed() -> f64 {
    2.0
}

fn default_time_step() -> f64 {
    0.1
}

fn default_max_steps() -> usize {
    20_000
}

fn default_arrival_tolerance() -> f64 {
    0.5
}

/// The mission flown by [`WaypointSimulator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    /// Waypoints in flight order; the first one is the takeoff position
    pub waypoints: Vec<Point3>,

    /// Cruise speed (m/s)
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Integration step (s); one trajectory sample is recorded per step
    #[serde(default = "default_time_step")]
    pub time_step: f64,

    /// Step budget before the flight counts as diverged
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Distance at which a waypoint counts as reached
    #[serde(default = "default_arrival_tolerance")]
    pub arrival_tolerance: f64,

    /// Reactive avoidance
    #[serde(default)]
    pub avoidance: Avoidance,
}

impl FlightPlan {
    /// A plan through `waypoints` with default flight parameters
    #[must_use]
    pub fn through(waypoints: Vec<Point3>) -> Self {
        Self {
            waypoints,
            speed: default_speed(),
            time_step: default_time_step(),
            max_steps: default_max_steps(),
            arrival_tolerance: default_arrival_tolerance(),
            avoidance: Avoidance::default(),
        }
    }

    fn step_length(&self) -> f64 {
        self.speed * self.time_step
    }
}

/// Deterministic waypoint follower with reactive avoidance
#[derive(Debug, Clone, Copy, Default)]
pub struct WaypointSimulator;

impl WaypointSimulator {
    /// Horizontal avoidance displacement at `position`
    fn avoidance_step(
        plan: &FlightPlan,
        position: Point3,
        heading: Vec2,
        obstacles: &[Obstacle],
    ) -> Vec2 {
        let influence = plan.avoidance.influence_radius;
        let step = plan.step_length();
        let here = position.xy();
        let mut push = Vec2::ZERO;

        for ob in obstacles {
            let top = ob.position.z + ob.size.h;
            if position.z > top {
                continue;
            }
            let away = here - ob.footprint().closest_point(here);
            let distance = away.length();
            let Some(normal) = away.normalized() else {
                // Inside the footprint: nothing sensible to push against.
                continue;
            };
            if distance >= influence {
                continue;
            }
            let strength = plan.avoidance.gain * step * (1.0 - distance / influence);
            let mut tangent = normal.perp();
            if tangent.dot(heading) < 0.0 {
                tangent = -tangent;
            }
            push = push + (normal + tangent) * (strength / std::f64::consts::SQRT_2);
        }

        let len = push.length();
        if len > step {
            push * (step / len)
        } else {
            push
        }
    }
}

impl Simulator for WaypointSimulator {
    type Mission = FlightPlan;

    fn execute(
        &self,
        plan: &FlightPlan,
        obstacles: &[Obstacle],
    ) -> Result<Trajectory, SimulationError> {
        let Some((&start, rest)) = plan.waypoints.split_first() else {
            return Err(SimulationError::InvalidTrajectory("flight plan has no waypoints".into()));
        };
        let step = plan.step_length();
        if !(step > 0.0) {
            return Err(SimulationError::InvalidTrajectory(format!(
                "non-positive step length {step}"
            )));
        }

        let mut position = start;
        let mut positions = vec![start];
        let mut steps = 0usize;

        for &target in rest {
            while position.distance(target) > plan.arrival_tolerance {
                if steps >= plan.max_steps {
                    return Err(SimulationError::Diverged { steps });
                }
                steps += 1;

                let to_target = target - position;
                let remaining = to_target.length();
                let advance = to_target * (step.min(remaining) / remaining);
                let heading = advance.xy().normalized().unwrap_or(Vec2::ZERO);
                let push = Self::avoidance_step(plan, position, heading, obstacles);

                position = position + advance + Point3::horizontal(push);
                positions.push(position);
            }
        }

        Trajectory::new(positions).validate()
    }
}
