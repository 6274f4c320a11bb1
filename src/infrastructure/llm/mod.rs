mod mock_generative_client;
mod ollama_client;

pub use mock_generative_client::MockGenerativeClient;
pub use ollama_client::OllamaClient;
