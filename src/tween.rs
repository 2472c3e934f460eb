use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{FlyThrough, SceneState, Tween, TweenSpec};

/// Drives the fly-through tween on its own animation-frame chain, separate
/// from rendering. Wall-clock time, so speed does not depend on frame rate.
pub struct TweenContext {
    scene: Rc<RefCell<SceneState>>,
    fly: FlyThrough,
    tween: Tween,
    last_instant: Instant,
}

impl TweenContext {
    pub fn new(scene: Rc<RefCell<SceneState>>, fly: FlyThrough, spec: TweenSpec) -> Self {
        Self {
            scene,
            fly,
            tween: Tween::new(spec),
            last_instant: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(progress) = self.tween.advance(dt) {
            self.scene.borrow_mut().apply_progress(progress, &self.fly);
        }
    }
}
