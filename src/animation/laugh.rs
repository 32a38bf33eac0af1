use crate::animation::cache::FrameCache;
use crate::animation::rig::Rig;
use crate::animation::timer::FeatureTimer;
use crate::assets::layers::{Feature, Pose};
use crate::foundation::error::FaceResult;
use crate::render::frame::PixelBuffer;
use crate::scene::config::Timings;

/// Laughing face: the mouth alternates between its variants while talking, eyes are static.
///
/// Variant 0 is held for `laugh_closed` ticks and variant 1 for `laugh_open`. When talking stops
/// the mouth snaps back to variant 0 and the next talking tick flips it straight away.
#[derive(Clone, Debug)]
pub struct LaughAnimation {
    rig: Rig,
    mouth: FeatureTimer,
    tick: u64,
    cache: FrameCache,
}

impl LaughAnimation {
    pub fn new(rig: Rig, timings: &Timings) -> FaceResult<Self> {
        let mouth = FeatureTimer::new(
            rig.variant_count(Feature::Mouth),
            vec![timings.laugh_closed, timings.laugh_open],
        )?;
        Ok(Self {
            rig,
            mouth,
            tick: 0,
            cache: FrameCache::default(),
        })
    }

    pub fn advance(&mut self, talking: bool) -> FaceResult<&PixelBuffer> {
        let tick = self.tick;
        self.tick += 1;

        let mut dirty = false;
        if self.cache.is_primed() {
            dirty = if talking {
                self.mouth.poll(tick)
            } else {
                self.mouth.rest()
            };
        }

        let pose = Pose::default().with(Feature::Mouth, self.mouth.index());
        self.cache.refresh(&self.rig, pose, dirty)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn mouth_index(&self) -> usize {
        self.mouth.index()
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
#[path = "../../tests/unit/animation/laugh.rs"]
mod tests;
