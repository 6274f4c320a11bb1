mod audio_decoder;
mod whisper_speech_model;

pub use audio_decoder::decode_file_to_pcm;
pub use whisper_speech_model::WhisperSpeechModel;
