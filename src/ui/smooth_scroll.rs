//! Horizontal smooth scroll with exponential ease-out.
//!
//! When an animated scroll request arrives, the distance between where the
//! pager is drawn and the new target becomes a displacement.  Each tick the
//! displacement decays toward zero, so pages slide in and decelerate.
//! Non-animated requests jump straight to the target.

use crate::core::scroll::ScrollRequest;

/// Column-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Where the scroll region wants to be.
    target: f64,
    /// Current drawn position minus `target`.
    displacement: f64,
    /// Damping: `displacement *= (1 - speed)` each tick.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            target: 0.0,
            displacement: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed a scroll request from the container.
    pub fn apply(&mut self, request: ScrollRequest) {
        let current = self.position();
        self.target = request.offset.x;
        self.displacement = if request.animated {
            current - self.target
        } else {
            0.0
        };
    }

    /// Decay the displacement toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        self.displacement *= 1.0 - self.speed;
        if self.displacement.abs() < 0.5 {
            self.displacement = 0.0;
        }
    }

    /// Offset to draw the pager at this frame.
    pub fn position(&self) -> f64 {
        self.target + self.displacement
    }

    /// True while there is visible motion left.
    pub fn is_animating(&self) -> bool {
        self.displacement != 0.0
    }
}
