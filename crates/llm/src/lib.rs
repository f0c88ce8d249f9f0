//! Client for the Perplexity chat-completions API and the prompts the
//! company profile editor uses to draft copy.

pub mod perplexity;
pub mod prompts;

pub use perplexity::{LlmError, PerplexityApi};
