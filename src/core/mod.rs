//! Core prompt polishing: input, template, completion, and the pipeline tying them together.

pub mod completion;
pub mod credentials;
pub mod http;
pub mod logging;
pub mod openai;
pub mod pipeline;
pub mod prompt_input;
pub mod template;

pub use completion::{Completion, CompletionClient, CompletionRequest};
pub use credentials::{API_KEY_ENV, ApiKey};
pub use openai::OpenAiClient;
pub use prompt_input::{PromptInput, PromptSource, RawPrompt, StdinInput, acquire_prompt};
pub use template::{SystemPromptTemplate, TemplateSource};
