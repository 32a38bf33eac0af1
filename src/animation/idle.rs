use crate::animation::cache::FrameCache;
use crate::animation::rig::Rig;
use crate::animation::timer::FeatureTimer;
use crate::assets::layers::{Feature, Pose};
use crate::foundation::error::FaceResult;
use crate::render::frame::PixelBuffer;
use crate::scene::config::Timings;

/// Resting face: blinks on a timer and moves the mouth while talking.
///
/// Eyes alternate open (variant 0) and closed (variant 1) with holds
/// `blink_open`/`blink_closed`. While talking the mouth steps through its variants every
/// `talk_hold` ticks, starting on the first talking tick; otherwise it rests on variant 0.
/// Both features are evaluated every tick and a single recomposite reflects both.
#[derive(Clone, Debug)]
pub struct IdleAnimation {
    rig: Rig,
    eyes: FeatureTimer,
    mouth: FeatureTimer,
    tick: u64,
    cache: FrameCache,
}

impl IdleAnimation {
    pub fn new(rig: Rig, timings: &Timings) -> FaceResult<Self> {
        let eyes = FeatureTimer::new(
            rig.variant_count(Feature::Eyes),
            vec![timings.blink_open, timings.blink_closed],
        )?;
        let mouth = FeatureTimer::rested(rig.variant_count(Feature::Mouth), vec![timings.talk_hold])?;
        Ok(Self {
            rig,
            eyes,
            mouth,
            tick: 0,
            cache: FrameCache::default(),
        })
    }

    /// Produce the frame for the current tick and advance the tick counter.
    pub fn advance(&mut self, talking: bool) -> FaceResult<&PixelBuffer> {
        let tick = self.tick;
        self.tick += 1;

        let mut dirty = false;
        if self.cache.is_primed() {
            dirty |= self.eyes.poll(tick);
            dirty |= if talking {
                self.mouth.poll(tick)
            } else {
                self.mouth.rest()
            };
        }

        let pose = Pose::default()
            .with(Feature::Eyes, self.eyes.index())
            .with(Feature::Mouth, self.mouth.index());
        self.cache.refresh(&self.rig, pose, dirty)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current eye variant (0 open, 1 closed).
    pub fn eyes_index(&self) -> usize {
        self.eyes.index()
    }

    pub fn mouth_index(&self) -> usize {
        self.mouth.index()
    }

    pub fn current_frame(&self) -> Option<&PixelBuffer> {
        self.cache.frame()
    }

    /// How many times a frame was composited.
    pub fn renders(&self) -> u64 {
        self.cache.renders()
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/idle.rs"]
mod tests;
