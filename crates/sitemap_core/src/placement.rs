//! Placement of newly added pages.

use crate::config::Viewport;
use crate::model::page::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses where a new page lands on the canvas.
pub trait Placement {
    fn place(&mut self, viewport: Viewport) -> Position;
}

/// Uniform random position within the top-left half of the viewport.
#[derive(Debug, Clone)]
pub struct RandomPlacement {
    rng: StdRng,
}

impl RandomPlacement {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic placement for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, extent: f64) -> f64 {
        let upper = extent / 2.0;
        if upper > 0.0 {
            self.rng.gen_range(0.0..upper)
        } else {
            0.0
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl Placement for RandomPlacement {
    fn place(&mut self, viewport: Viewport) -> Position {
        let x = self.sample(viewport.width);
        let y = self.sample(viewport.height);
        Position::new(x, y)
    }
}

/// Always returns the same position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPlacement(pub Position);

impl Placement for FixedPlacement {
    fn place(&mut self, _viewport: Viewport) -> Position {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Placement, RandomPlacement};
    use crate::config::Viewport;

    #[test]
    fn random_placement_stays_in_half_viewport() {
        let mut placement = RandomPlacement::seeded(7);
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        for _ in 0..64 {
            let position = placement.place(viewport);
            assert!((0.0..400.0).contains(&position.x));
            assert!((0.0..300.0).contains(&position.y));
        }
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let viewport = Viewport::default();
        let a = RandomPlacement::seeded(42).place(viewport);
        let b = RandomPlacement::seeded(42).place(viewport);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_viewport_places_at_origin() {
        let mut placement = RandomPlacement::seeded(1);
        let position = placement.place(Viewport {
            width: 0.0,
            height: 0.0,
        });
        assert_eq!((position.x, position.y), (0.0, 0.0));
    }
}
