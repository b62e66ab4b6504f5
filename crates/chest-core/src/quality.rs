//! Frame-rate driven renderer quality throttle.
//!
//! Frames are counted over windows of at least [`QUALITY_WINDOW_MS`]. At the
//! end of each window the rounded FPS is mapped to a directive; the band
//! between the two thresholds issues nothing so the renderer does not flip
//! back and forth around a single cut-off.

use crate::constants::{HIGH_QUALITY_FPS, LOW_QUALITY_FPS, QUALITY_WINDOW_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingPrecision {
    Low,
    Medium,
}

impl ShadingPrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingPrecision::Low => "lowp",
            ShadingPrecision::Medium => "mediump",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererSettings {
    pub antialias: bool,
    pub precision: ShadingPrecision,
}

impl RendererSettings {
    /// Value for the A-Frame `renderer` scene attribute.
    pub fn to_attribute(&self) -> String {
        format!(
            "antialias: {}; precision: {}",
            self.antialias,
            self.precision.as_str()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityDirective {
    Low,
    High,
}

impl QualityDirective {
    pub fn settings(self) -> RendererSettings {
        match self {
            QualityDirective::Low => RendererSettings {
                antialias: false,
                precision: ShadingPrecision::Low,
            },
            QualityDirective::High => RendererSettings {
                antialias: true,
                precision: ShadingPrecision::Medium,
            },
        }
    }
}

/// Map a measured frame rate to a directive; `None` inside the hysteresis band.
#[inline]
pub fn directive_for_fps(fps: u32) -> Option<QualityDirective> {
    if fps < LOW_QUALITY_FPS {
        Some(QualityDirective::Low)
    } else if fps > HIGH_QUALITY_FPS {
        Some(QualityDirective::High)
    } else {
        None
    }
}

/// Start of the current sampling window and frames counted since.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    pub timestamp_ms: f64,
    pub count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct QualityGovernor {
    window: Option<FrameSample>,
    last_fps: Option<u32>,
}

impl QualityGovernor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    /// Record one rendered frame at `now_ms`.
    ///
    /// The first frame only sets the window start. Returns a directive when a
    /// window closes outside the hysteresis band.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<QualityDirective> {
        let Some(sample) = self.window.as_mut() else {
            self.window = Some(FrameSample {
                timestamp_ms: now_ms,
                count: 0,
            });
            return None;
        };
        sample.count += 1;
        let elapsed = now_ms - sample.timestamp_ms;
        if elapsed < QUALITY_WINDOW_MS {
            return None;
        }
        let fps = (sample.count as f64 * 1000.0 / elapsed).round() as u32;
        *sample = FrameSample {
            timestamp_ms: now_ms,
            count: 0,
        };
        self.last_fps = Some(fps);
        let directive = directive_for_fps(fps);
        if let Some(d) = directive {
            log::info!("[quality] fps={} -> {:?}", fps, d);
        }
        directive
    }
}
