use crate::effects::{ConfettiBurst, EffectId, LidAnimation, ParticleBurst};
use crate::quality::RendererSettings;
use crate::reward::Reward;
use glam::Vec3;

/// On-screen buttons driven by the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Scan,
    Place,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Open,
    Reward,
}

/// One mutation of the scene, the HUD or the audio output.
///
/// The core never touches those collaborators directly; the frontend applies
/// commands in the order they were returned.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    ShowControl(Control),
    HideControl(Control),
    SetControlLabel(Control, &'static str),
    SetInstructions(&'static str),

    MoveChest(Vec3),
    ScaleChest(f32),
    PlayOpenAnimation,
    /// Drop the animation mixer and return the chest to zero rotation.
    ClearChestAnimation,
    AttachLid(LidAnimation),
    DetachLid,
    ApplyGlow,
    ClearGlow,

    AttachParticles(ParticleBurst),
    DetachParticles(EffectId),
    SpawnConfetti(ConfettiBurst),
    LaunchConfetti(EffectId),
    FadeConfetti(EffectId),
    RemoveConfetti(EffectId),

    PlaySound(SoundCue),
    ShowReward(&'static Reward),
    HideReward,

    ConfigureRenderer(RendererSettings),
}
