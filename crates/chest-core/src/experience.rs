//! Session owner: routes every input through the placement and chest state
//! machines, the gesture controller and the quality governor, and turns the
//! outcome into [`Command`]s for the frontend.
//!
//! Deferred steps of a chest lifecycle (hint text, reward reveal, rearm,
//! effect teardown) are entries on a [`Timeline`] tagged with the current
//! [`CycleId`]. A reset cancels the whole cycle, so nothing scheduled before
//! it can fire afterwards.

use crate::camera::SceneCamera;
use crate::chest::ChestState;
use crate::command::{Command, Control, SoundCue};
use crate::constants::*;
use crate::effects::{ConfettiBurst, EffectId, LidAnimation, ParticleBurst};
use crate::error::TransitionError;
use crate::gesture::GestureController;
use crate::input::Pointer;
use crate::placement::PlacementState;
use crate::quality::QualityGovernor;
use crate::reward::{pick_reward, Reward};
use crate::timeline::{CycleId, Timeline};
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    OpenHint,
    RevealReward,
    ArmReset,
    ReshowOpenControl,
    DetachParticles(EffectId),
    LaunchConfetti(EffectId),
    FadeConfetti(EffectId),
    RemoveConfetti(EffectId),
}

/// Everything the interaction flow knows about the current chest.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub placement: PlacementState,
    pub chest: ChestState,
    pub scale: f32,
    pub position: Vec3,
    pub cycle: CycleId,
    /// Reward revealed in this cycle, if any.
    pub reward: Option<&'static Reward>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            placement: PlacementState::Idle,
            chest: ChestState::Closed,
            scale: 1.0,
            position: OFFSCENE_POSITION,
            cycle: CycleId::default(),
            reward: None,
        }
    }
}

impl SessionState {
    pub fn surface_scanned(&self) -> bool {
        self.placement.surface_scanned()
    }

    pub fn chest_placed(&self) -> bool {
        self.placement.chest_placed()
    }

    pub fn chest_open(&self) -> bool {
        self.chest.is_open()
    }
}

pub struct Experience<R> {
    session: SessionState,
    camera: SceneCamera,
    governor: QualityGovernor,
    quality_active: bool,
    gestures: GestureController,
    timeline: Timeline<Deferred>,
    rng: R,
    next_effect: EffectId,
    live_particles: SmallVec<[EffectId; 2]>,
    live_confetti: SmallVec<[EffectId; 2]>,
    lid_attached: bool,
}

impl<R: Rng> Experience<R> {
    pub fn new(rng: R) -> Self {
        Self {
            session: SessionState::default(),
            camera: SceneCamera::default(),
            governor: QualityGovernor::new(),
            quality_active: false,
            gestures: GestureController::new(),
            timeline: Timeline::new(),
            rng,
            next_effect: 0,
            live_particles: SmallVec::new(),
            live_confetti: SmallVec::new(),
            lid_attached: false,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn set_camera(&mut self, camera: SceneCamera) {
        self.camera = camera;
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    pub fn live_effects(&self) -> usize {
        self.live_particles.len() + self.live_confetti.len()
    }

    /// Commands that bring the HUD and scene into the starting layout.
    pub fn initial_commands(&self) -> Vec<Command> {
        vec![
            Command::ShowControl(Control::Scan),
            Command::HideControl(Control::Place),
            Command::HideControl(Control::Open),
            Command::SetControlLabel(Control::Open, OPEN_LABEL),
            Command::SetInstructions(INITIAL_INSTRUCTIONS),
            Command::MoveChest(OFFSCENE_POSITION),
        ]
    }

    /// Start feeding frames to the quality governor.
    pub fn scene_loaded(&mut self) {
        if !self.quality_active {
            self.quality_active = true;
            log::info!("[quality] monitoring started");
        }
    }

    pub fn scan(&mut self) -> Result<Vec<Command>, TransitionError> {
        self.session.placement = self.session.placement.scan()?;
        log::info!("[placement] surface scanned (cycle {})", self.session.cycle.0);
        Ok(vec![
            Command::HideControl(Control::Scan),
            Command::ShowControl(Control::Place),
            Command::SetInstructions(SCANNED_INSTRUCTIONS),
        ])
    }

    /// Placement tap from either a click or a touch.
    pub fn tap(&mut self, pointer: Pointer) -> Result<Vec<Command>, TransitionError> {
        let hit = pointer.ground_hit(&self.camera);
        let (next, point) = self.session.placement.place(hit)?;
        self.session.placement = next;
        self.session.position = point;
        log::info!(
            "[placement] chest placed at ({:.2},{:.2},{:.2})",
            point.x,
            point.y,
            point.z
        );
        Ok(vec![
            Command::MoveChest(point),
            Command::HideControl(Control::Place),
            Command::ShowControl(Control::Open),
            Command::SetInstructions(PLACED_INSTRUCTIONS),
        ])
    }

    /// The open control doubles as "place new chest" once the cycle is armed.
    pub fn press_open_control(&mut self, now_ms: f64) -> Result<Vec<Command>, TransitionError> {
        match self.session.chest {
            ChestState::ResetArmed => self.reset(),
            _ => self.open_chest(now_ms),
        }
    }

    pub fn open_chest(&mut self, now_ms: f64) -> Result<Vec<Command>, TransitionError> {
        self.session.chest = self.session.chest.open(self.session.placement)?;
        let cycle = self.session.cycle;
        let particles = self.alloc_effect();
        self.live_particles.push(particles);
        self.lid_attached = true;

        self.timeline
            .schedule(cycle, now_ms + OPEN_HINT_DELAY_MS, Deferred::OpenHint);
        self.timeline
            .schedule(cycle, now_ms + REWARD_REVEAL_DELAY_MS, Deferred::RevealReward);
        self.timeline.schedule(
            cycle,
            now_ms + PARTICLE_LIFETIME_MS,
            Deferred::DetachParticles(particles),
        );
        self.timeline
            .schedule(cycle, now_ms + REARM_DELAY_MS, Deferred::ArmReset);
        log::info!("[chest] opening (cycle {})", cycle.0);

        Ok(vec![
            Command::PlayOpenAnimation,
            Command::AttachLid(LidAnimation::opening()),
            Command::ApplyGlow,
            Command::HideControl(Control::Open),
            Command::AttachParticles(ParticleBurst::new(particles)),
            Command::PlaySound(SoundCue::Open),
            Command::SetInstructions(OPENING_INSTRUCTIONS),
        ])
    }

    /// Full reset back to the scan prompt. Only allowed once the cycle is armed.
    pub fn reset(&mut self) -> Result<Vec<Command>, TransitionError> {
        self.session.chest.reset()?;
        let cycle = self.session.cycle;
        let cancelled = self.timeline.cancel_cycle(cycle);

        let mut out = Vec::new();
        out.extend(self.live_particles.drain(..).map(Command::DetachParticles));
        out.extend(self.live_confetti.drain(..).map(Command::RemoveConfetti));
        if std::mem::take(&mut self.lid_attached) {
            out.push(Command::DetachLid);
        }
        out.extend([
            Command::MoveChest(OFFSCENE_POSITION),
            Command::ScaleChest(1.0),
            Command::HideControl(Control::Open),
            Command::SetControlLabel(Control::Open, OPEN_LABEL),
            Command::SetInstructions(INITIAL_INSTRUCTIONS),
            Command::ClearChestAnimation,
            Command::ClearGlow,
            Command::HideReward,
            Command::HideControl(Control::Place),
            Command::ShowControl(Control::Scan),
        ]);

        self.gestures.reset();
        self.session = SessionState {
            cycle: cycle.next(),
            ..SessionState::default()
        };
        log::info!(
            "[chest] reset (cycle {} -> {}, cancelled {} pending)",
            cycle.0,
            self.session.cycle.0,
            cancelled
        );
        Ok(out)
    }

    /// Dismiss the reward card. The open control comes back shortly after if
    /// the cycle is waiting for "place new chest".
    pub fn close_reward(&mut self, now_ms: f64) -> Vec<Command> {
        self.timeline.schedule(
            self.session.cycle,
            now_ms + CLOSE_RESHOW_DELAY_MS,
            Deferred::ReshowOpenControl,
        );
        vec![Command::HideReward]
    }

    /// Returns true when the host should prevent its default touch handling.
    pub fn touch_start(&mut self, touches: &[Vec2]) -> bool {
        self.gestures.touch_start(touches)
    }

    pub fn touch_move(&mut self, touches: &[Vec2]) -> Vec<Command> {
        let update = self.gestures.touch_move(touches);
        let mut out = Vec::new();
        if let Some(scale) = update.scale {
            self.session.scale = scale;
            out.push(Command::ScaleChest(scale));
        }
        if let Some(delta) = update.translation {
            self.session.position += delta;
            out.push(Command::MoveChest(self.session.position));
        }
        out
    }

    pub fn touch_end(&mut self) {
        self.gestures.touch_end();
    }

    /// Per-frame hook: samples frame timing, then runs due continuations.
    pub fn frame(&mut self, now_ms: f64) -> Vec<Command> {
        let mut out = Vec::new();
        if self.quality_active {
            if let Some(directive) = self.governor.on_frame(now_ms) {
                out.push(Command::ConfigureRenderer(directive.settings()));
            }
        }
        out.extend(self.advance(now_ms));
        out
    }

    /// Run every continuation due at or before `now_ms` in time order,
    /// including ones scheduled by continuations fired in this call.
    pub fn advance(&mut self, now_ms: f64) -> Vec<Command> {
        let mut out = Vec::new();
        while let Some(f) = self.timeline.pop_due(now_ms) {
            if f.cycle != self.session.cycle {
                log::debug!("[timeline] dropping stale {:?} from cycle {}", f.task, f.cycle.0);
                continue;
            }
            self.run_deferred(f.task, f.due_ms, &mut out);
        }
        out
    }

    fn run_deferred(&mut self, task: Deferred, at_ms: f64, out: &mut Vec<Command>) {
        match task {
            Deferred::OpenHint => out.push(Command::SetInstructions(REVEALED_INSTRUCTIONS)),
            Deferred::RevealReward => self.reveal_reward(at_ms, out),
            Deferred::ArmReset => match self.session.chest.arm_reset() {
                Ok(next) => {
                    self.session.chest = next;
                    out.push(Command::SetControlLabel(Control::Open, PLACE_NEW_LABEL));
                    out.push(Command::ShowControl(Control::Open));
                    log::info!("[chest] armed for reset");
                }
                Err(e) => log::debug!("[chest] rearm skipped: {}", e),
            },
            Deferred::ReshowOpenControl => {
                if self.session.chest == ChestState::ResetArmed {
                    out.push(Command::ShowControl(Control::Open));
                }
            }
            Deferred::DetachParticles(id) => {
                self.live_particles.retain(|p| *p != id);
                out.push(Command::DetachParticles(id));
            }
            Deferred::LaunchConfetti(id) => out.push(Command::LaunchConfetti(id)),
            Deferred::FadeConfetti(id) => out.push(Command::FadeConfetti(id)),
            Deferred::RemoveConfetti(id) => {
                self.live_confetti.retain(|c| *c != id);
                out.push(Command::RemoveConfetti(id));
            }
        }
    }

    fn reveal_reward(&mut self, at_ms: f64, out: &mut Vec<Command>) {
        match self.session.chest.reveal() {
            Ok(next) => self.session.chest = next,
            Err(e) => {
                log::debug!("[chest] reveal skipped: {}", e);
                return;
            }
        }
        let reward = pick_reward(&mut self.rng);
        self.session.reward = Some(reward);
        let cycle = self.session.cycle;
        let confetti = self.alloc_effect();
        self.live_confetti.push(confetti);
        self.timeline.schedule(
            cycle,
            at_ms + CONFETTI_LAUNCH_DELAY_MS,
            Deferred::LaunchConfetti(confetti),
        );
        self.timeline.schedule(
            cycle,
            at_ms + CONFETTI_FLIGHT_MS,
            Deferred::FadeConfetti(confetti),
        );
        self.timeline.schedule(
            cycle,
            at_ms + CONFETTI_FLIGHT_MS + CONFETTI_FADE_MS,
            Deferred::RemoveConfetti(confetti),
        );
        log::info!("[chest] reward revealed: {}", reward.title);

        out.push(Command::PlaySound(SoundCue::Reward));
        out.push(Command::ShowReward(reward));
        out.push(Command::SpawnConfetti(ConfettiBurst::scatter(
            confetti,
            &mut self.rng,
        )));
    }

    fn alloc_effect(&mut self) -> EffectId {
        let id = self.next_effect;
        self.next_effect = self.next_effect.wrapping_add(1);
        id
    }
}
