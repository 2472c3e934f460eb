//! Minimal duration-based tween: interpolates one scalar with an easing curve,
//! optional repeats and yoyo. Time is pushed in by the caller, so the same
//! tween runs under `requestAnimationFrame`, a winit loop, or a test.

use crate::constants::FLY_DURATION_SECS;
use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicInOut,
    SineInOut,
}

impl Ease {
    /// Map linear progress in \[0, 1\] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => t * (2.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Extra plays after the first.
    Count(u32),
    Infinite,
}

#[derive(Clone, Debug)]
pub struct TweenSpec {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub ease: Ease,
    pub repeat: Repeat,
    /// Reverse direction on every other play.
    pub yoyo: bool,
}

impl TweenSpec {
    /// Progress 0 → 1 over the fly-through duration, linear, forever.
    pub fn fly_through() -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration: Duration::from_secs_f32(FLY_DURATION_SECS),
            ease: Ease::Linear,
            repeat: Repeat::Infinite,
            yoyo: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    spec: TweenSpec,
    elapsed_sec: f64,
    finished: bool,
}

impl Tween {
    pub fn new(spec: TweenSpec) -> Self {
        Self {
            spec,
            elapsed_sec: 0.0,
            finished: false,
        }
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_sec)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Step the clock and return the value for this update, or `None` once a
    /// finite tween has already delivered its final value.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if self.finished {
            return None;
        }
        self.elapsed_sec += dt.as_secs_f64();
        if let Repeat::Count(n) = self.spec.repeat {
            let total = self.duration_sec() * (n as f64 + 1.0);
            if self.elapsed_sec >= total {
                self.elapsed_sec = total;
                self.finished = true;
            }
        }
        Some(self.value_at_secs(self.elapsed_sec))
    }

    /// Value at `elapsed` since start, without touching the tween's clock.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        self.value_at_secs(elapsed.as_secs_f64())
    }

    fn duration_sec(&self) -> f64 {
        self.spec.duration.as_secs_f64()
    }

    fn value_at_secs(&self, elapsed: f64) -> f32 {
        let d = self.duration_sec();
        if d <= 0.0 {
            return self.spec.to;
        }
        let (cycle, local) = match self.spec.repeat {
            // a finite tween rests on the end of its last play
            Repeat::Count(n) if elapsed >= d * (n as f64 + 1.0) => (n as u64, 1.0),
            _ => {
                let cycles = elapsed.max(0.0) / d;
                (cycles.floor() as u64, cycles.fract())
            }
        };
        let mut t = local as f32;
        if self.spec.yoyo && cycle % 2 == 1 {
            t = 1.0 - t;
        }
        let eased = self.spec.ease.apply(t);
        self.spec.from + (self.spec.to - self.spec.from) * eased
    }
}
