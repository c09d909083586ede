//! Batched slope estimation over the sample stream.
//!
//! Points accumulate in a window. Once the window holds more than
//! `precision` points, the oldest `precision` are removed as one batch and
//! the slope between the first and last point of that batch is emitted. The
//! one point left behind carries into the next batch.

use std::collections::VecDeque;

use super::mapper::GridPoint;

/// Number of points consumed per slope estimate.
pub const DERIVATIVE_PRECISION: usize = 5;

/// Outcome of feeding one point to the [`DerivativeEstimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlopeStep {
    /// The window has not yet exceeded its trigger size.
    Pending,
    /// A batch was consumed but its endpoints share an x; no slope.
    Vertical { first: GridPoint, last: GridPoint },
    /// First slope of the epoch. Stored, nothing to connect it to yet.
    First { slope: f64 },
    /// A slope connected to the previous one.
    ///
    /// `from` is `(first.x, previous slope)` and `to` is `(last.x, slope)`,
    /// both in grid space.
    Segment {
        from: GridPoint,
        to: GridPoint,
        slope: f64,
    },
}

#[derive(Debug, Clone)]
pub struct DerivativeEstimator {
    window: VecDeque<GridPoint>,
    precision: usize,
    prev_slope: Option<f64>,
}

impl Default for DerivativeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivativeEstimator {
    pub fn new() -> Self {
        Self::with_precision(DERIVATIVE_PRECISION)
    }

    /// Batches need two distinct endpoints, so precision is at least 2.
    pub fn with_precision(precision: usize) -> Self {
        let precision = precision.max(2);
        Self {
            window: VecDeque::with_capacity(precision + 1),
            precision,
            prev_slope: None,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Points waiting in the window.
    pub fn pending(&self) -> usize {
        self.window.len()
    }

    pub fn prev_slope(&self) -> Option<f64> {
        self.prev_slope
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.prev_slope = None;
    }

    pub fn push(&mut self, point: GridPoint) -> SlopeStep {
        self.window.push_back(point);
        if self.window.len() <= self.precision {
            return SlopeStep::Pending;
        }

        let mut batch = self.window.drain(..self.precision);
        let first = batch.next();
        let last = batch.last();
        let (Some(first), Some(last)) = (first, last) else {
            return SlopeStep::Pending;
        };

        if first.x == last.x {
            return SlopeStep::Vertical { first, last };
        }

        let slope = (last.y - first.y) / (last.x - first.x);
        let step = match self.prev_slope {
            None => SlopeStep::First { slope },
            Some(prev) => SlopeStep::Segment {
                from: GridPoint::new(first.x, prev),
                to: GridPoint::new(last.x, slope),
                slope,
            },
        };
        self.prev_slope = Some(slope);
        step
    }
}
