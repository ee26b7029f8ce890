// AI module for generative playlist creation
//
// This module provides:
// - OpenAI chat-completions client with rate-limit retry
// - Secure credential storage via OS keychain
// - Prompt construction for the numbered listing format

pub mod client;
pub mod credentials;
pub mod prompt;

// Re-export commonly used types
pub use client::OpenAiClient;
pub use credentials::CredentialManager;
pub use prompt::{build_listing_prompt, DEFAULT_TRACK_COUNT, SYSTEM_PROMPT};
