//! facerig drives an animated on-screen face from layered sprites.
//!
//! A [`FrameGenerator`] owns one timed state machine per animation (idle, angry, laugh) and is
//! asked for the next frame once per display tick. Input and audio threads steer it through a
//! [`ControlHandle`]: which animation is active, and whether the avatar is talking.
//!
//! # Pipeline overview
//!
//! 1. **Load**: sprites are decoded from the resource directory and fitted to the working
//!    resolution once, at construction ([`SpriteStore`], [`load_layer_set`]).
//! 2. **Tick**: the active [`Animation`] advances its tick counter and decides whether any
//!    feature (eyes, mouth) flips to another variant.
//! 3. **Composite**: on ticks where something changed, the background and the selected variants
//!    are alpha-blended bottom to top ([`composite`]); other ticks return the cached frame.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO per tick**: all decoding happens before the first frame.
//! - **Deterministic**: a frame is a pure function of (animation, ticks elapsed, talking flag).
//! - **Premultiplied RGBA8** internally; [`PixelBuffer::to_straight_rgba8`] converts for export.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod foundation;
mod render;
mod scene;
mod session;

pub use animation::angry::AngryAnimation;
pub use animation::idle::IdleAnimation;
pub use animation::laugh::LaughAnimation;
pub use animation::machine::{Animation, AnimationKind};
pub use animation::rig::Rig;
pub use animation::timer::FeatureTimer;
pub use assets::decode::{ResizeFilter, decode_sprite};
pub use assets::layers::{
    Feature, LayerSet, LayerSlot, LayerSource, LayerSpec, Pose, load_layer_set,
    load_layer_set_with,
};
pub use assets::store::{SpriteStore, normalize_rel_path};
pub use foundation::core::Resolution;
pub use foundation::error::{BoxedSource, FaceError, FaceResult};
pub use render::composite::{PremulRgba8, composite, composite_into, over, over_in_place};
pub use render::frame::PixelBuffer;
pub use scene::config::{AvatarConfig, Timings};
pub use session::controls::ControlHandle;
pub use session::frame_generator::{
    FrameGenerator, static_first_frame, static_first_frame_with_config,
};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
