use crate::animation::cache::FrameCache;
use crate::animation::rig::Rig;
use crate::assets::layers::Pose;
use crate::foundation::error::FaceResult;
use crate::render::frame::PixelBuffer;

/// Static angry face. Composited once on the first tick, then served from cache.
#[derive(Clone, Debug)]
pub struct AngryAnimation {
    rig: Rig,
    tick: u64,
    cache: FrameCache,
}

impl AngryAnimation {
    pub fn new(rig: Rig) -> Self {
        Self {
            rig,
            tick: 0,
            cache: FrameCache::default(),
        }
    }

    /// The talking flag is accepted for symmetry with the other animations and ignored.
    pub fn advance(&mut self, _talking: bool) -> FaceResult<&PixelBuffer> {
        self.tick += 1;
        self.cache.refresh(&self.rig, Pose::default(), false)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn current_frame(&self) -> Option<&PixelBuffer> {
        self.cache.frame()
    }

    pub fn renders(&self) -> u64 {
        self.cache.renders()
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/angry.rs"]
mod tests;
