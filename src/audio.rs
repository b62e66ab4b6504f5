use chest_core::SoundCue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{OPEN_SOUND_ID, REWARD_SOUND_ID};
use crate::dom;

/// The `<audio>` clips of the experience. Missing clips are skipped.
pub struct SoundBank {
    open: Option<web::HtmlAudioElement>,
    reward: Option<web::HtmlAudioElement>,
}

impl SoundBank {
    pub fn from_document(document: &web::Document) -> Self {
        let lookup = |id: &str| {
            let clip = dom::element_by_id::<web::HtmlAudioElement>(document, id);
            if clip.is_none() {
                log::warn!("[audio] missing clip #{}", id);
            }
            clip
        };
        Self {
            open: lookup(OPEN_SOUND_ID),
            reward: lookup(REWARD_SOUND_ID),
        }
    }

    fn clip(&self, cue: SoundCue) -> Option<&web::HtmlAudioElement> {
        match cue {
            SoundCue::Open => self.open.as_ref(),
            SoundCue::Reward => self.reward.as_ref(),
        }
    }

    /// Rewind and play. A rejected playback (autoplay policy, decode error) is
    /// logged and otherwise ignored.
    pub fn play(&self, cue: SoundCue) {
        let Some(clip) = self.clip(cue) else {
            return;
        };
        clip.set_current_time(0.0);
        match clip.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] play {:?} rejected: {:?}", cue, e);
                }
            }),
            Err(e) => log::warn!("[audio] play {:?} failed: {:?}", cue, e),
        }
    }
}
