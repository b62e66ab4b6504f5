use chest_core::{Command, GLOW_MATERIAL};
use web_sys as web;

use crate::audio::SoundBank;
use crate::overlay::Hud;
use crate::scene::SceneBindings;

/// Every collaborator the core's commands are applied to.
pub struct Bindings {
    pub scene: SceneBindings,
    pub hud: Hud,
    pub sounds: SoundBank,
}

impl Bindings {
    pub fn new(document: &web::Document, scene: web::Element) -> Self {
        Self {
            scene: SceneBindings::new(document, scene),
            hud: Hud::from_document(document),
            sounds: SoundBank::from_document(document),
        }
    }

    pub fn apply(&self, commands: &[Command]) {
        for cmd in commands {
            self.apply_one(cmd);
        }
    }

    fn apply_one(&self, cmd: &Command) {
        match cmd {
            Command::ShowControl(c) => self.hud.set_control_visible(*c, true),
            Command::HideControl(c) => self.hud.set_control_visible(*c, false),
            Command::SetControlLabel(c, label) => self.hud.set_control_label(*c, label),
            Command::SetInstructions(text) => self.hud.set_instructions(text),

            Command::MoveChest(p) => self.scene.move_chest(*p),
            Command::ScaleChest(s) => self.scene.scale_chest(*s),
            Command::PlayOpenAnimation => self.scene.play_open_animation(),
            Command::ClearChestAnimation => self.scene.clear_chest_animation(),
            Command::AttachLid(lid) => self.scene.attach_lid(lid),
            Command::DetachLid => self.scene.detach_lid(),
            Command::ApplyGlow => self.scene.set_glow(Some(GLOW_MATERIAL)),
            Command::ClearGlow => self.scene.set_glow(None),

            Command::AttachParticles(burst) => self.scene.attach_particles(burst),
            Command::DetachParticles(id) => self.scene.detach_particles(*id),
            Command::SpawnConfetti(burst) => self.hud.spawn_confetti(burst),
            Command::LaunchConfetti(id) => self.hud.launch_confetti(*id),
            Command::FadeConfetti(id) => self.hud.fade_confetti(*id),
            Command::RemoveConfetti(id) => self.hud.remove_confetti(*id),

            Command::PlaySound(cue) => self.sounds.play(*cue),
            Command::ShowReward(reward) => self.hud.show_reward(reward),
            Command::HideReward => self.hud.hide_reward(),

            Command::ConfigureRenderer(settings) => self.scene.configure_renderer(settings),
        }
    }
}
