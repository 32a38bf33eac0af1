use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::animation::machine::AnimationKind;
use crate::foundation::error::FaceResult;

#[derive(Debug)]
struct SharedControls {
    active: AtomicU8,
    talking: AtomicBool,
}

/// Cloneable handle through which input and audio threads steer a [`crate::FrameGenerator`].
///
/// The active animation and the talking flag are independent atomics: each read observes a
/// fully written value, and a change lands on the next tick rather than partway through one.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    inner: Arc<SharedControls>,
}

impl ControlHandle {
    pub(crate) fn new(initial: AnimationKind) -> Self {
        Self {
            inner: Arc::new(SharedControls {
                active: AtomicU8::new(initial.index() as u8),
                talking: AtomicBool::new(false),
            }),
        }
    }

    /// Switch to the animation named `name`.
    ///
    /// Unknown names are rejected with [`crate::FaceError::UnknownState`] and leave the active
    /// animation unchanged.
    pub fn set_state(&self, name: &str) -> FaceResult<AnimationKind> {
        let kind = name.parse::<AnimationKind>()?;
        self.set_kind(kind);
        Ok(kind)
    }

    pub fn set_kind(&self, kind: AnimationKind) {
        let prev = self.inner.active.swap(kind.index() as u8, Ordering::AcqRel);
        if usize::from(prev) != kind.index() {
            tracing::debug!(animation = %kind, "switched animation");
        }
    }

    pub fn set_talking(&self, talking: bool) {
        let prev = self.inner.talking.swap(talking, Ordering::AcqRel);
        if prev != talking {
            tracing::trace!(talking, "talking flag changed");
        }
    }

    pub fn active(&self) -> AnimationKind {
        AnimationKind::from_index(self.inner.active.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub fn is_talking(&self) -> bool {
        self.inner.talking.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controls.rs"]
mod tests;
