use std::fmt;
use std::str::FromStr;

use crate::animation::angry::AngryAnimation;
use crate::animation::idle::IdleAnimation;
use crate::animation::laugh::LaughAnimation;
use crate::animation::rig::Rig;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::frame::PixelBuffer;

/// Names of the animations a face can switch between.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Blinking, talking resting face.
    #[default]
    Idle,
    /// Static angry face (also accepted as `"mad"`).
    #[serde(alias = "mad")]
    Angry,
    /// Laughing face.
    Laugh,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 3] = [AnimationKind::Idle, AnimationKind::Angry, AnimationKind::Laugh];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::Angry => "angry",
            AnimationKind::Laugh => "laugh",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(AnimationKind::Idle),
            "angry" | "mad" => Ok(AnimationKind::Angry),
            "laugh" => Ok(AnimationKind::Laugh),
            _ => Err(FaceError::unknown_state(s)),
        }
    }
}

/// One animation state machine, selected from the closed set of [`AnimationKind`]s.
#[derive(Clone, Debug)]
pub enum Animation {
    Idle(IdleAnimation),
    Angry(AngryAnimation),
    Laugh(LaughAnimation),
}

impl Animation {
    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::Idle(_) => AnimationKind::Idle,
            Animation::Angry(_) => AnimationKind::Angry,
            Animation::Laugh(_) => AnimationKind::Laugh,
        }
    }

    /// Produce this tick's frame. Call exactly once per display tick while active.
    pub fn advance(&mut self, talking: bool) -> FaceResult<&PixelBuffer> {
        match self {
            Animation::Idle(a) => a.advance(talking),
            Animation::Angry(a) => a.advance(talking),
            Animation::Laugh(a) => a.advance(talking),
        }
    }

    /// Ticks advanced so far.
    pub fn tick(&self) -> u64 {
        match self {
            Animation::Idle(a) => a.tick(),
            Animation::Angry(a) => a.tick(),
            Animation::Laugh(a) => a.tick(),
        }
    }

    /// Last frame produced, if any.
    pub fn current_frame(&self) -> Option<&PixelBuffer> {
        match self {
            Animation::Idle(a) => a.current_frame(),
            Animation::Angry(a) => a.current_frame(),
            Animation::Laugh(a) => a.current_frame(),
        }
    }

    pub fn renders(&self) -> u64 {
        match self {
            Animation::Idle(a) => a.renders(),
            Animation::Angry(a) => a.renders(),
            Animation::Laugh(a) => a.renders(),
        }
    }

    pub fn rig(&self) -> &Rig {
        match self {
            Animation::Idle(a) => a.rig(),
            Animation::Angry(a) => a.rig(),
            Animation::Laugh(a) => a.rig(),
        }
    }
}

impl From<IdleAnimation> for Animation {
    fn from(a: IdleAnimation) -> Self {
        Animation::Idle(a)
    }
}

impl From<AngryAnimation> for Animation {
    fn from(a: AngryAnimation) -> Self {
        Animation::Angry(a)
    }
}

impl From<LaughAnimation> for Animation {
    fn from(a: LaughAnimation) -> Self {
        Animation::Laugh(a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/machine.rs"]
mod tests;
