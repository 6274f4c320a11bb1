mod generative_client;
mod speech_model;

pub use generative_client::{GenerationOptions, GenerativeClient, GenerativeClientError};
pub use speech_model::{SpeechModel, TranscriptionError};
