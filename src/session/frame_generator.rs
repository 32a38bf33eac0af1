use std::path::Path;

use crate::animation::angry::AngryAnimation;
use crate::animation::idle::IdleAnimation;
use crate::animation::laugh::LaughAnimation;
use crate::animation::machine::{Animation, AnimationKind};
use crate::animation::rig::Rig;
use crate::assets::layers::{Pose, load_layer_set_with};
use crate::assets::store::SpriteStore;
use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::frame::PixelBuffer;
use crate::scene::config::AvatarConfig;
use crate::session::controls::ControlHandle;

/// Routes display ticks to the active animation.
///
/// All sprites are decoded when the generator is built; [`FrameGenerator::next_frame`] performs
/// no IO and only composites on ticks where a feature changes. Only the active animation's tick
/// counter advances, so an animation resumes exactly where it left off when switched back to.
#[derive(Debug)]
pub struct FrameGenerator {
    resolution: Resolution,
    animations: [Animation; 3],
    controls: ControlHandle,
    frames_served: u64,
}

impl FrameGenerator {
    /// Build a generator for the default avatar, loading sprites from `resource_path`.
    pub fn new(resolution: Resolution, resource_path: impl AsRef<Path>) -> FaceResult<Self> {
        Self::with_config(resolution, resource_path, &AvatarConfig::default())
    }

    /// Build a generator for `config`, loading sprites from `resource_path`.
    ///
    /// Fails with [`FaceError::ResourceLoad`] if any referenced sprite is missing or corrupt.
    #[tracing::instrument(skip_all, fields(resolution = %resolution, resources = %resource_path.as_ref().display()))]
    pub fn with_config(
        resolution: Resolution,
        resource_path: impl AsRef<Path>,
        config: &AvatarConfig,
    ) -> FaceResult<Self> {
        config.validate()?;

        let mut store = SpriteStore::new(resource_path.as_ref(), resolution, config.filter);
        let background = store.load(&config.background)?;
        let mut rig_for = |kind: AnimationKind| -> FaceResult<Rig> {
            let layers = load_layer_set_with(&mut store, config.layers(kind))?;
            Rig::new(background.clone(), layers)
        };

        let idle = IdleAnimation::new(rig_for(AnimationKind::Idle)?, &config.timings)?;
        let angry = AngryAnimation::new(rig_for(AnimationKind::Angry)?);
        let laugh = LaughAnimation::new(rig_for(AnimationKind::Laugh)?, &config.timings)?;
        tracing::debug!(sprites = store.len(), "avatar sprites loaded");

        Self::from_animations(idle, angry, laugh)
    }

    /// Assemble a generator from already-built animations.
    pub fn from_animations(
        idle: IdleAnimation,
        angry: AngryAnimation,
        laugh: LaughAnimation,
    ) -> FaceResult<Self> {
        let resolution = idle.rig().resolution();
        for other in [angry.rig().resolution(), laugh.rig().resolution()] {
            if other != resolution {
                return Err(FaceError::dimension_mismatch(resolution, other));
            }
        }

        Ok(Self {
            resolution,
            animations: [idle.into(), angry.into(), laugh.into()],
            controls: ControlHandle::new(AnimationKind::Idle),
            frames_served: 0,
        })
    }

    /// Handle for collaborator threads; shares state with this generator.
    pub fn controls(&self) -> ControlHandle {
        self.controls.clone()
    }

    /// See [`ControlHandle::set_state`].
    pub fn set_state(&self, name: &str) -> FaceResult<AnimationKind> {
        self.controls.set_state(name)
    }

    pub fn set_talking(&self, talking: bool) {
        self.controls.set_talking(talking);
    }

    pub fn active(&self) -> AnimationKind {
        self.controls.active()
    }

    pub fn is_talking(&self) -> bool {
        self.controls.is_talking()
    }

    /// Advance the active animation by one tick and return its frame.
    pub fn next_frame(&mut self) -> FaceResult<&PixelBuffer> {
        let kind = self.controls.active();
        let talking = self.controls.is_talking();
        self.frames_served += 1;
        self.animations[kind.index()].advance(talking)
    }

    pub fn animation(&self, kind: AnimationKind) -> &Animation {
        &self.animations[kind.index()]
    }

    /// Total `next_frame` calls across all animations.
    pub fn frames_served(&self) -> u64 {
        self.frames_served
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

/// Compose the default idle frame (eyes open, mouth resting) of the built-in avatar.
///
/// Meant for painting the window before the tick loop starts; it loads only the first variant of
/// each feature and builds no per-tick state.
pub fn static_first_frame(
    resource_path: impl AsRef<Path>,
    resolution: Resolution,
) -> FaceResult<PixelBuffer> {
    static_first_frame_with_config(resource_path, resolution, &AvatarConfig::default())
}

/// Like [`static_first_frame`] for an arbitrary avatar config.
#[tracing::instrument(skip_all, fields(resolution = %resolution, resources = %resource_path.as_ref().display()))]
pub fn static_first_frame_with_config(
    resource_path: impl AsRef<Path>,
    resolution: Resolution,
    config: &AvatarConfig,
) -> FaceResult<PixelBuffer> {
    config.validate()?;

    let mut store = SpriteStore::new(resource_path.as_ref(), resolution, config.filter);
    let background = store.load(&config.background)?;
    let layers = load_layer_set_with(&mut store, &config.idle.first_variants())?;
    Rig::new(background, layers)?.compose(Pose::default())
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_generator.rs"]
mod tests;
