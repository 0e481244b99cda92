//! Parameterized sound descriptions for the host synthesizer.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Oscillator shape for a synthesized effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Saw,
    Noise,
}

/// A synthesized sound effect: amplitude envelope plus pitch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    /// (time, amplitude) envelope points. Times in seconds.
    pub envelope: Vec<(f32, f32)>,
    pub waveform: Waveform,
    pub volume: f32,
    /// Starting pitch in semitones relative to the synth's base note.
    pub pitch: f32,
    /// Pitch the effect slides toward over its duration.
    pub pitch_slide: f32,
    /// Playback speed multiplier.
    pub speed: f32,
}

impl SoundSpec {
    /// Gunshot burst. Pitch varies a little per shot.
    pub fn gunshot(rng: &mut GameRng) -> Self {
        Self {
            envelope: vec![
                (0.0, 0.0),
                (0.1, 0.9),
                (0.15, 0.75),
                (0.3, 0.14),
                (0.6, 0.0),
            ],
            waveform: Waveform::Noise,
            volume: 0.5,
            pitch: rng.range_f32(-13.0, -12.0),
            pitch_slide: -12.0,
            speed: 3.0,
        }
    }
}
