//! Audio capture module using cpal
//!
//! Captures 16 kHz mono PCM from the microphone and segments the chunk
//! stream into utterances with an energy-based pause detector.

use crate::config::Config;
use crate::error::{VaartaError, VaartaResult};
use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, info, warn};

pub const SAMPLE_RATE: u32 = 16000;
const CHUNK_SIZE: usize = 1024;

/// How long to wait for speech to start before giving up on a turn
const START_TIMEOUT_SECS: u64 = 30;

/// Start audio capture and return a receiver for audio chunks
pub fn start_capture(device_index: Option<usize>) -> Result<UnboundedReceiver<Vec<i16>>> {
    let host = cpal::default_host();

    // List available devices
    info!("Available audio input devices:");
    for (i, device) in host.input_devices()?.enumerate() {
        let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        let marker = if device_index == Some(i) { "*" } else { " " };
        info!("  {} [{}] {}", marker, i, name);
    }

    // Select device
    let device = if let Some(idx) = device_index {
        host.input_devices()?
            .nth(idx)
            .context("Device index out of range")?
    } else {
        host.default_input_device()
            .context("No default input device")?
    };

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("Using audio device: {}", device_name);

    // Configure stream
    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Fixed(CHUNK_SIZE as u32),
    };

    let (tx, rx) = unbounded_channel::<Vec<i16>>();

    // Build input stream
    let stream = device.build_input_stream(
        &config,
        move |data: &[i16], _: &cpal::InputCallbackInfo| {
            // Send audio chunk to main loop
            if tx.send(data.to_vec()).is_err() {
                warn!("Audio receiver dropped");
            }
        },
        |err| {
            warn!("Audio stream error: {}", err);
        },
        None,
    )?;

    stream.play()?;

    // Keep stream alive by leaking it (it runs in background)
    std::mem::forget(stream);

    Ok(rx)
}

/// Calculate audio energy for VAD
pub fn calculate_energy(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum: i64 = samples.iter().map(|&s| (s as i64).pow(2)).sum();
    (sum as f32 / samples.len() as f32).sqrt()
}

/// Segments the capture stream into utterances
///
/// An utterance starts with the first chunk whose energy crosses the
/// threshold and ends after `pause_threshold_ms` of trailing silence,
/// or when `max_utterance_secs` is reached.
pub struct Listener {
    rx: UnboundedReceiver<Vec<i16>>,
    energy_threshold: f32,
    pause_chunks: usize,
    max_chunks: usize,
}

impl Listener {
    pub fn new(rx: UnboundedReceiver<Vec<i16>>, config: &Config) -> Self {
        let chunk_ms = CHUNK_SIZE as u64 * 1000 / SAMPLE_RATE as u64;
        let pause_chunks = (config.pause_threshold_ms / chunk_ms).max(1) as usize;
        let max_chunks = (config.max_utterance_secs * 1000 / chunk_ms).max(1) as usize;

        Self {
            rx,
            energy_threshold: config.energy_threshold,
            pause_chunks,
            max_chunks,
        }
    }

    /// Capture one utterance
    ///
    /// Returns an empty buffer if no speech starts within the timeout;
    /// errors only when the capture stream is gone.
    pub async fn listen(&mut self) -> VaartaResult<Vec<i16>> {
        // Phase 1: wait for speech to start
        let first = tokio::time::timeout(
            Duration::from_secs(START_TIMEOUT_SECS),
            self.wait_for_speech(),
        )
        .await;

        let mut samples = match first {
            Ok(Ok(chunk)) => chunk,
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                debug!("No speech within {}s", START_TIMEOUT_SECS);
                return Ok(Vec::new());
            }
        };

        // Phase 2: collect until trailing silence
        let mut silent_chunks = 0usize;
        let mut total_chunks = 1usize;

        while let Some(chunk) = self.rx.recv().await {
            let energy = calculate_energy(&chunk);
            samples.extend_from_slice(&chunk);
            total_chunks += 1;

            if energy < self.energy_threshold {
                silent_chunks += 1;
                if silent_chunks >= self.pause_chunks {
                    break;
                }
            } else {
                silent_chunks = 0;
            }

            if total_chunks >= self.max_chunks {
                debug!("Utterance hit max length, finalizing");
                break;
            }
        }

        debug!(
            "Captured utterance: {} samples ({} chunks)",
            samples.len(),
            total_chunks
        );
        Ok(samples)
    }

    async fn wait_for_speech(&mut self) -> VaartaResult<Vec<i16>> {
        loop {
            match self.rx.recv().await {
                Some(chunk) => {
                    if calculate_energy(&chunk) >= self.energy_threshold {
                        return Ok(chunk);
                    }
                }
                None => return Err(VaartaError::Audio("capture stream closed".to_string())),
            }
        }
    }
}
