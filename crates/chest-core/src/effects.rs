//! Fire-and-forget visual flourishes: the particle burst on the chest and the
//! confetti spray over the reward card. Only the plans live here; timing is
//! driven by the experience timeline and drawing by the frontend.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Identifies a live effect so its teardown can find it again.
pub type EffectId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBurst {
    pub id: EffectId,
    pub offset: Vec3,
    pub preset: &'static str,
    pub colors: &'static [&'static str],
    pub particle_count: u32,
    pub duration_sec: f32,
}

impl ParticleBurst {
    pub fn new(id: EffectId) -> Self {
        Self {
            id,
            offset: PARTICLE_OFFSET,
            preset: PARTICLE_PRESET,
            colors: &PARTICLE_COLORS,
            particle_count: PARTICLE_COUNT,
            duration_sec: (PARTICLE_LIFETIME_MS / 1000.0) as f32,
        }
    }

    /// Value for the `particle-system` component attribute.
    pub fn to_attribute(&self) -> String {
        format!(
            "preset: {}; color: {}; particleCount: {}; duration: {}",
            self.preset,
            self.colors.join(","),
            self.particle_count,
            self.duration_sec
        )
    }
}

/// Timed lid rotation spawned when the chest opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LidAnimation {
    pub offset: Vec3,
    pub from_deg: f32,
    pub to_deg: f32,
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl LidAnimation {
    pub fn opening() -> Self {
        Self {
            offset: LID_OFFSET,
            from_deg: 0.0,
            to_deg: LID_OPEN_ANGLE_DEG,
            duration_ms: LID_OPEN_DURATION_MS,
            easing: LID_EASING,
        }
    }

    /// Value for the `animation` component attribute.
    pub fn to_attribute(&self) -> String {
        format!(
            "property: rotation; from: {} 0 0; to: {} 0 0; dur: {}; easing: {}",
            self.from_deg, self.to_deg, self.duration_ms, self.easing
        )
    }
}

/// One confetti dot: its colour and where it flies to, relative to the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiMarker {
    pub hue_deg: f32,
    pub offset_px: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub id: EffectId,
    pub markers: Vec<ConfettiMarker>,
}

impl ConfettiBurst {
    pub fn scatter<R: Rng + ?Sized>(id: EffectId, rng: &mut R) -> Self {
        let markers = (0..CONFETTI_COUNT)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let distance =
                    CONFETTI_MIN_DISTANCE_PX + rng.gen::<f32>() * CONFETTI_DISTANCE_SPAN_PX;
                ConfettiMarker {
                    hue_deg: rng.gen_range(0.0..360.0),
                    offset_px: Vec2::from_angle(angle) * distance,
                }
            })
            .collect();
        Self { id, markers }
    }
}
