use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::machine::AnimationKind;
use crate::assets::decode::ResizeFilter;
use crate::assets::layers::{LayerSource, LayerSpec};
use crate::foundation::error::{FaceError, FaceResult};

/// Hold durations, in ticks, for every timed feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// Idle: ticks the eyes stay open between blinks.
    pub blink_open: u64,
    /// Idle: ticks the eyes stay closed during a blink.
    pub blink_closed: u64,
    /// Idle: ticks between mouth changes while talking.
    pub talk_hold: u64,
    /// Laugh: ticks the mouth stays on variant 0.
    pub laugh_closed: u64,
    /// Laugh: ticks the mouth stays on variant 1.
    pub laugh_open: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            blink_open: 60,
            blink_closed: 5,
            talk_hold: 6,
            laugh_closed: 8,
            laugh_open: 8,
        }
    }
}

impl Timings {
    pub fn validate(&self) -> FaceResult<()> {
        let holds = [
            ("blink_open", self.blink_open),
            ("blink_closed", self.blink_closed),
            ("talk_hold", self.talk_hold),
            ("laugh_closed", self.laugh_closed),
            ("laugh_open", self.laugh_open),
        ];
        for (name, ticks) in holds {
            if ticks == 0 {
                return Err(FaceError::validation(format!(
                    "timings.{name} must be > 0 ticks"
                )));
            }
        }
        Ok(())
    }
}

/// Sprite set and timing description of one avatar.
///
/// File names are resolved relative to the resource directory handed to
/// [`crate::FrameGenerator::with_config`]. Missing fields fall back to [`AvatarConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarConfig {
    /// Bottom layer shared by every animation.
    pub background: String,
    pub idle: LayerSpec,
    #[serde(alias = "mad")]
    pub angry: LayerSpec,
    pub laugh: LayerSpec,
    pub timings: Timings,
    /// Filter used to fit sprites to the working resolution.
    pub filter: ResizeFilter,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            background: "background.png".to_owned(),
            idle: LayerSpec {
                face: Some("idle_face.png".into()),
                mouth: Some(["idle_mouth.png", "lol_mouth.png"].into()),
                eyes: Some(["idle_eyes.png", "idle_blink.png"].into()),
                flair: None,
            },
            angry: LayerSpec {
                face: Some("idle_face.png".into()),
                mouth: Some("mad_mouth.png".into()),
                eyes: Some("mad_eyes.png".into()),
                flair: None,
            },
            laugh: LayerSpec {
                face: Some("idle_face.png".into()),
                mouth: Some(["lol_mouth.png", "idle_mouth.png"].into()),
                eyes: Some("lol_eyes.png".into()),
                flair: None,
            },
            timings: Timings::default(),
            filter: ResizeFilter::default(),
        }
    }
}

impl AvatarConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> FaceResult<Self> {
        let config: AvatarConfig = serde_json::from_reader(r)
            .map_err(|e| FaceError::serde(format!("parse avatar config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> FaceResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FaceError::validation(format!("open avatar config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Layer spec for `kind`.
    pub fn layers(&self, kind: AnimationKind) -> &LayerSpec {
        match kind {
            AnimationKind::Idle => &self.idle,
            AnimationKind::Angry => &self.angry,
            AnimationKind::Laugh => &self.laugh,
        }
    }

    /// Every sprite file this config references, background first, without duplicates.
    pub fn sprite_files(&self) -> Vec<&str> {
        let mut out = vec![self.background.as_str()];
        for kind in AnimationKind::ALL {
            let spec = self.layers(kind);
            let sources = [&spec.face, &spec.mouth, &spec.eyes, &spec.flair];
            for file in sources
                .into_iter()
                .flatten()
                .flat_map(LayerSource::files)
            {
                if !out.contains(&file.as_str()) {
                    out.push(file.as_str());
                }
            }
        }
        out
    }

    pub fn validate(&self) -> FaceResult<()> {
        if self.background.trim().is_empty() {
            return Err(FaceError::validation("background must name a sprite file"));
        }
        for kind in AnimationKind::ALL {
            self.layers(kind).validate(kind.as_str())?;
        }
        self.timings.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
