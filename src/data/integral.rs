//! Running area under the sample stream, one left-rectangle at a time.

use std::collections::VecDeque;

use super::mapper::GridPoint;

/// Outcome of feeding one point to the [`IntegralEstimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaStep {
    /// Fewer than two points available.
    Pending,
    /// The leading pair shares an x. The leading point was still consumed.
    Vertical { first: GridPoint, second: GridPoint },
    /// A new area increment.
    ///
    /// `from` is `(first.x, total before)` and `to` is `(second.x, total after)`.
    Increment {
        from: GridPoint,
        to: GridPoint,
        area: f64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct IntegralEstimator {
    window: VecDeque<GridPoint>,
    total: f64,
}

impl IntegralEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn pending(&self) -> usize {
        self.window.len()
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.total = 0.0;
    }

    pub fn push(&mut self, point: GridPoint) -> AreaStep {
        self.window.push_back(point);
        if self.window.len() < 2 {
            return AreaStep::Pending;
        }
        let Some(first) = self.window.pop_front() else {
            return AreaStep::Pending;
        };
        let Some(&second) = self.window.front() else {
            return AreaStep::Pending;
        };

        if first.x == second.x {
            return AreaStep::Vertical { first, second };
        }

        // Left-rectangle rule: height of the leading point over the x step.
        let area = first.y * (second.x - first.x);
        let from = GridPoint::new(first.x, self.total);
        self.total += area;
        AreaStep::Increment {
            from,
            to: GridPoint::new(second.x, self.total),
            area,
        }
    }
}
