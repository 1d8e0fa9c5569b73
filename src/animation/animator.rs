// src/animation/animator.rs
//
// Fixed-delay ticker driven from the frame loop.
// Accumulates frame time and reports how many ticks are due.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    delay: Duration,
    elapsed: Duration,
}

impl Animator {
    pub fn new(delay: Duration) -> Self {
        assert!(!delay.is_zero(), "tick delay must be non-zero");
        Self {
            animated: false,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns false if already running
    pub fn start(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn stop(&mut self) {
        self.animated = false;
        self.elapsed = Duration::ZERO;
    }

    /// Number of whole ticks due after `dt`; the remainder carries over.
    pub fn ticks(&mut self, dt: Duration) -> u32 {
        if !self.animated {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.delay {
            self.elapsed -= self.delay;
            due += 1;
        }
        due
    }
}
