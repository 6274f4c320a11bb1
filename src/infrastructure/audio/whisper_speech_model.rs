use std::path::Path;

use async_trait::async_trait;
use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;
use tokio::sync::Mutex;

use crate::application::ports::{SpeechModel, TranscriptionError};

use super::audio_decoder::decode_file_to_pcm;

// Repo carrying the precomputed 80-bin mel filterbank bytes.
const MEL_FILTERS_REPO: &str = "FL33TW00D-HF/whisper-base";

/// Local Whisper inference on CPU via candle. Weights, tokenizer and config
/// are fetched from the Hugging Face hub once at load time. The decoder's
/// KV cache is stateful, so inference is serialized behind a mutex.
pub struct WhisperSpeechModel {
    model: Mutex<m::model::Whisper>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
}

impl WhisperSpeechModel {
    pub fn load(model_id: &str) -> Result<Self, TranscriptionError> {
        let device = Device::Cpu;

        tracing::info!(model = model_id, "Loading Whisper model");

        let api = Api::new().map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo.get("model.safetensors").map_err(|e| {
            TranscriptionError::ModelLoadFailed(format!("model.safetensors: {}", e))
        })?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        let mel_filters = load_mel_filters(&api, &config)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| TranscriptionError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = m::model::Whisper::load(&vb, config.clone())
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("model: {}", e)))?;

        tracing::info!(model = model_id, "Whisper model loaded successfully");

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
            mel_filters,
        })
    }

    /// Pads a window of PCM to the model's fixed 30s input and projects it
    /// onto the mel spectrogram.
    fn window_to_mel(&self, window: &[f32]) -> Result<Tensor, TranscriptionError> {
        let samples = if window.len() < m::N_SAMPLES {
            let mut padded = window.to_vec();
            padded.resize(m::N_SAMPLES, 0.0);
            padded
        } else {
            window.to_vec()
        };

        let mel_data = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
        let n_mel = self.config.num_mel_bins;
        let n_frames = mel_data.len() / n_mel;

        Tensor::from_vec(mel_data, (1, n_mel, n_frames), &self.device)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("mel tensor: {}", e)))
    }
}

#[async_trait]
impl SpeechModel for WhisperSpeechModel {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let pcm = decode_file_to_pcm(audio_path)?;

        let mut segments: Vec<String> = Vec::new();
        let mut model = self.model.lock().await;

        for (index, window) in pcm.chunks(m::N_SAMPLES).enumerate() {
            tracing::debug!(segment = index, "Transcribing audio segment");
            let mel = self.window_to_mel(window)?;
            let text = greedy_decode(&mut model, &self.tokenizer, &self.device, &mel)?;
            if !text.is_empty() {
                segments.push(text);
            }
        }

        let transcript = segments.join(" ");

        tracing::info!(
            segments = segments.len(),
            chars = transcript.len(),
            "Audio transcription completed"
        );

        Ok(transcript)
    }
}

fn greedy_decode(
    model: &mut m::model::Whisper,
    tokenizer: &Tokenizer,
    device: &Device,
    mel: &Tensor,
) -> Result<String, TranscriptionError> {
    let sot = special_token(tokenizer, m::SOT_TOKEN)?;
    let transcribe = special_token(tokenizer, m::TRANSCRIBE_TOKEN)?;
    let no_timestamps = special_token(tokenizer, m::NO_TIMESTAMPS_TOKEN)?;
    let eot = special_token(tokenizer, m::EOT_TOKEN)?;

    let audio_features = model
        .encoder
        .forward(mel, true)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("encoder: {}", e)))?;

    let mut tokens = vec![sot, transcribe, no_timestamps];
    let max_tokens = 224;
    let mut text = String::new();

    for _ in 0..max_tokens {
        let token_tensor = Tensor::new(tokens.as_slice(), device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

        // Flush the KV cache on the first decoder step only.
        let decoder_output = model
            .decoder
            .forward(&token_tensor, &audio_features, tokens.len() == 3)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("decoder: {}", e)))?;

        let logits = decoder_output
            .squeeze(0)
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))
            .and_then(|out| {
                model
                    .decoder
                    .final_linear(&out)
                    .map_err(|e| TranscriptionError::TranscriptionFailed(format!("linear: {}", e)))
            })?;

        let seq_len = logits
            .dim(0)
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;
        let next_token = logits
            .get(seq_len - 1)
            .and_then(|l| l.argmax(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(|e| TranscriptionError::TranscriptionFailed(e.to_string()))?;

        if next_token == eot {
            break;
        }

        tokens.push(next_token);

        if let Some(piece) = tokenizer.id_to_token(next_token) {
            text.push_str(&piece.replace("Ġ", " ").replace("▁", " "));
        }
    }

    model.reset_kv_cache();

    Ok(text.trim().to_string())
}

fn special_token(tokenizer: &Tokenizer, token: &str) -> Result<u32, TranscriptionError> {
    tokenizer.token_to_id(token).ok_or_else(|| {
        TranscriptionError::TranscriptionFailed(format!("token not found: {}", token))
    })
}

fn load_mel_filters(api: &Api, config: &Config) -> Result<Vec<f32>, TranscriptionError> {
    let repo = api.repo(Repo::new(MEL_FILTERS_REPO.to_string(), RepoType::Model));
    let path = repo
        .get("melfilters.bytes")
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("melfilters.bytes: {}", e)))?;
    let bytes = std::fs::read(&path)
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("mel filters: {}", e)))?;

    let expected_len = config.num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(TranscriptionError::ModelLoadFailed(format!(
            "mel filters file too small: {} bytes, expected at least {}",
            bytes.len(),
            expected_len * 4
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .take(expected_len)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
