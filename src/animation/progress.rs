// src/animation/progress.rs
//
// Per-node progress: one sweep moves `scale` from its checkpoint (0 or 1)
// to the opposite extreme.

/// Direction of the sweep in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sweep {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl Sweep {
    pub fn sign(self) -> f32 {
        match self {
            Sweep::Idle => 0.0,
            Sweep::Forward => 1.0,
            Sweep::Backward => -1.0,
        }
    }

    /// Head toward the extreme opposite `checkpoint`
    fn away_from(checkpoint: f32) -> Self {
        if 1.0 - 2.0 * checkpoint > 0.0 {
            Sweep::Forward
        } else {
            Sweep::Backward
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    pub scale: f32,
    pub dir: Sweep,
    pub prev_scale: f32,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.dir == Sweep::Idle
    }

    /// Advance by one tick. Returns true when the sweep completes.
    pub fn update(&mut self, step: f32) -> bool {
        self.scale += step * self.dir.sign();
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir.sign();
            self.dir = Sweep::Idle;
            self.prev_scale = self.scale;
            return true;
        }
        false
    }

    /// Begin a sweep if idle. Returns false (and changes nothing) otherwise.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = Sweep::away_from(self.prev_scale);
        true
    }
}
