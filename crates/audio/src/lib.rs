//! Synthesized sound effects and background music.
//!
//! All audio is generated at runtime as mono f32 sample buffers; there are no
//! asset files. Effects play on short-lived detached sinks, the music loop on
//! a persistent sink that pauses with the game. Construction fails when no
//! output device exists; callers treat that as "run silent" by dropping the
//! whole [`AudioOutput`].

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use brickdrop_types::GameEvent;

const SAMPLE_RATE: u32 = 44_100;

const EFFECT_AMP: f32 = 0.2;
const MUSIC_AMP: f32 = 0.05;

/// One of the game's sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Move,
    Rotate,
    Drop,
    Sweep,
    LevelUp,
    GameOver,
}

/// The effect a session event should trigger, if any.
pub fn sound_for(event: GameEvent) -> Option<Sound> {
    match event {
        GameEvent::Moved | GameEvent::Held => Some(Sound::Move),
        GameEvent::Rotated => Some(Sound::Rotate),
        GameEvent::Locked => Some(Sound::Drop),
        GameEvent::LinesCleared { .. } => Some(Sound::Sweep),
        GameEvent::LevelUp { .. } => Some(Sound::LevelUp),
        GameEvent::GameOver => Some(Sound::GameOver),
        GameEvent::RowCleared { .. } => None,
    }
}

pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl AudioOutput {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music: None,
        })
    }

    /// Fire-and-forget playback of one effect.
    pub fn play(&self, sound: Sound) {
        let samples = match sound {
            Sound::Move => tone(400.0, 0.1),
            Sound::Rotate => tone(600.0, 0.1),
            Sound::Drop => tone(200.0, 0.1),
            Sound::Sweep => slide(800.0, 1200.0, 0.2),
            Sound::LevelUp => level_up_melody(),
            Sound::GameOver => slide(100.0, 40.0, 1.0),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    /// Start the looping background track from the top.
    pub fn start_music(&mut self) {
        self.stop_music();
        if let Ok(sink) = Sink::try_new(&self.handle) {
            let buffer = SamplesBuffer::new(1, SAMPLE_RATE, music_loop());
            sink.append(buffer.repeat_infinite());
            self.music = Some(sink);
        }
    }

    pub fn pause_music(&self) {
        if let Some(sink) = &self.music {
            sink.pause();
        }
    }

    pub fn resume_music(&self) {
        if let Some(sink) = &self.music {
            sink.play();
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

/// Render a sine sweep from `from` to `to` Hz, fading out over `duration`.
///
/// Phase accumulates across the frequency ramp so the slide stays clickless.
fn slide(from: f32, to: f32, duration: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;

    for i in 0..count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let freq = from + (to - from) * (t / duration);
        phase += std::f32::consts::TAU * freq / SAMPLE_RATE as f32;
        let fade = 1.0 - t / duration;
        samples.push(phase.sin() * EFFECT_AMP * fade);
    }
    samples
}

fn tone(freq: f32, duration: f32) -> Vec<f32> {
    slide(freq, freq, duration)
}

/// Four rising notes, staggered so each starts before the last has faded.
fn level_up_melody() -> Vec<f32> {
    const NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
    const NOTE_LEN: f32 = 0.15;
    const NOTE_GAP: f32 = 0.1;

    let total = NOTE_GAP * (NOTES.len() as f32 - 1.0) + NOTE_LEN;
    let mut samples = vec![0.0f32; (SAMPLE_RATE as f32 * total) as usize];

    for (idx, freq) in NOTES.iter().enumerate() {
        let start = (NOTE_GAP * idx as f32 * SAMPLE_RATE as f32) as usize;
        for (i, s) in tone(*freq, NOTE_LEN).into_iter().enumerate() {
            if let Some(slot) = samples.get_mut(start + i) {
                *slot += s;
            }
        }
    }
    samples
}

/// One bar of the background track: a bass line with a lead on top.
fn music_loop() -> Vec<f32> {
    const BASS: [f32; 4] = [110.0, 110.0, 130.81, 98.0];
    const LEAD: [f32; 4] = [440.0, 523.25, 659.25, 523.25];
    const NOTE_LEN: f32 = 0.25;

    let note_samples = (SAMPLE_RATE as f32 * NOTE_LEN) as usize;
    let mut samples = vec![0.0f32; note_samples * BASS.len()];

    for (idx, (bass, lead)) in BASS.iter().zip(&LEAD).enumerate() {
        let start = idx * note_samples;
        for i in 0..note_samples {
            let t = i as f32 / SAMPLE_RATE as f32;
            let fade = 1.0 - t / NOTE_LEN;
            let b = (std::f32::consts::TAU * bass * t).sin();
            let l = (std::f32::consts::TAU * lead * t).sin() * fade;
            samples[start + i] = (b + l) * MUSIC_AMP;
        }
    }
    samples
}
