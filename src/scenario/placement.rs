//! State transitions that place or move obstacles.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::error::PlacementError;
use super::list::Scenario;
use super::obstacle::{Obstacle, Position, Size};
use super::state::ScenarioState;
use crate::geometry::{
    largest_free_circle, nonintersecting_rectangle_near, sample_rectangle_in_circle, Circle, Rect,
    Vec2, MAX_ROTATION,
};

fn footprints(scenario: &Scenario) -> Vec<Rect> {
    scenario.iter_rev().map(Obstacle::footprint).collect()
}

impl ScenarioState {
    /// Candidate centers for the next obstacle.
    ///
    /// The first obstacle is drawn from the entry band: trajectory points
    /// inside the region, up to the first point beyond the entry cutoff.
    fn candidate_points(&self) -> Result<Vec<Vec2>, PlacementError> {
        let trajectory = self.trajectory().ok_or(PlacementError::MissingTrajectory)?;
        let region = self.config().region;
        let points: Vec<Vec2> = if self.is_empty() {
            let cutoff = self.config().entry_cutoff();
            trajectory
                .points_2d()
                .take_while(|p| p.y <= cutoff)
                .filter(|&p| region.contains(p))
                .collect()
        } else {
            trajectory.points_2d().filter(|&p| region.contains(p)).collect()
        };
        Ok(points)
    }

    /// A child state with one more obstacle centered on a random point of
    /// the trajectory and clear of every obstacle already placed.
    pub fn add_obstacle_near_trajectory(&self, rng: &mut impl Rng) -> Result<Self, PlacementError> {
        let candidates = self.candidate_points()?;
        let &center = candidates.choose(rng).ok_or(PlacementError::NoCandidatePoint)?;
        let config = self.config();

        let rect = if self.is_empty() {
            let radius = config.region.distance_to_edges(center);
            sample_rectangle_in_circle(&Circle::new(center, radius), config.sample_eps, rng)
        } else {
            let others = footprints(self.scenario());
            nonintersecting_rectangle_near(center, &config.region, &others, &config.sampling(), rng)
        }
        .ok_or(PlacementError::NoFreeSpace)?;

        let obstacle = Obstacle::from_footprint(&rect, config.obstacle_height);
        Ok(self.derive(self.scenario().pushed(obstacle)))
    }

    /// A sibling state whose last obstacle keeps its footprint but gets a
    /// fresh random rotation.
    pub fn relocate_last_obstacle_randomly(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Self, PlacementError> {
        let last = self.scenario().last().ok_or(PlacementError::EmptyScenario)?;
        let obstacle = Obstacle::new(
            Size { h: self.config().obstacle_height, ..last.size },
            Position { z: 0.0, r: rng.random_range(0.0..=MAX_ROTATION), ..last.position },
        );
        Ok(self.derive(self.scenario().with_last_replaced(obstacle)))
    }

    /// A sibling state whose last obstacle moves halfway towards the
    /// nearest trajectory point and turns to face it.
    ///
    /// The new footprint is sampled in the free circle at the midpoint,
    /// capped at half the distance to the trajectory. When no such circle
    /// exists the obstacle is rotated in place instead.
    pub fn refine_last_obstacle_by_projection(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Self, PlacementError> {
        let last = *self.scenario().last().ok_or(PlacementError::EmptyScenario)?;
        let trajectory = self.trajectory().ok_or(PlacementError::MissingTrajectory)?;
        let center = last.center();
        let (nearest, distance) =
            trajectory.nearest_point(center).ok_or(PlacementError::MissingTrajectory)?;
        let config = self.config();

        let projected = (nearest - center).angle_to_x_axis().and_then(|angle| {
            let midpoint = center.midpoint(nearest);
            let circles: Vec<Circle> = footprints(&self.scenario().without_last())
                .iter()
                .flat_map(|r| r.circle_cover(config.subdivisions))
                .collect();
            let slack = config.free_circle_slack;
            let free = largest_free_circle(midpoint, &config.region, &circles, slack, rng)?;
            let capped = Circle::new(midpoint, free.radius.min(distance / 2.0));
            let rect = sample_rectangle_in_circle(&capped, config.sample_eps, rng)?;
            Some(facing(rect, angle))
        });

        match projected {
            Some(rect) => {
                let obstacle = Obstacle::from_footprint(&rect, config.obstacle_height);
                Ok(self.derive(self.scenario().with_last_replaced(obstacle)))
            }
            None => self.relocate_last_obstacle_randomly(rng),
        }
    }
}

/// Orient `rect` relative to the direction `angle` (degrees from +x).
fn facing(rect: Rect, angle: f64) -> Rect {
    let short = rect.length.min(rect.width);
    let long = rect.length.max(rect.width);
    if angle > 90.0 {
        Rect::new(rect.center, short, long, angle - 90.0)
    } else {
        Rect::new(rect.center, long, short, angle)
    }
}
