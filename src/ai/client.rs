// OpenAI API client
//
// Implements communication with the chat-completions API for:
// - Chat requests with a system role
// - Mood playlist generation
// - Rate limiting and error handling

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ai::prompt::{build_listing_prompt, DEFAULT_TRACK_COUNT, SYSTEM_PROMPT};
use crate::listing::{extract_tracks, TrackRecord};
use crate::mood;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 500;
const MAX_RETRIES: u32 = 2;

/// Message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system", "user" or "assistant"
    pub content: String,
}

/// Request to the chat-completions API
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

pub struct OpenAiClient {
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: String) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { api_key, client })
    }

    /// Send a chat conversation and return the assistant's text body.
    ///
    /// 429 responses are retried with a short backoff before giving up.
    pub async fn chat(
        &self,
        messages: Vec<Message>,
        system_prompt: Option<String>,
    ) -> Result<String, String> {
        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(system) = system_prompt {
            all_messages.push(Message {
                role: "system".to_string(),
                content: system,
            });
        }
        all_messages.extend(messages);

        let request = ChatRequest {
            model: OPENAI_MODEL.to_string(),
            messages: all_messages,
            max_tokens: MAX_TOKENS,
        };

        let mut attempt = 0;
        loop {
            let response = self
                .client
                .post(OPENAI_API_URL)
                .header(header::CONTENT_TYPE, "application/json")
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| format!("API request failed: {}", e))?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_RETRIES {
                attempt += 1;
                tokio::time::sleep(Duration::from_secs(1 << attempt)).await;
                continue;
            }

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(format!("API error {}: {}", status, error_text));
            }

            let chat_response: ChatResponse = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))?;

            return chat_response
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| "Response contained no choices".to_string());
        }
    }

    /// Generate the raw track listing for a mood. The response body is
    /// returned as-is; callers feed it through the extractor.
    pub async fn generate_listing(&self, mood: &str) -> Result<String, String> {
        let genres = mood::resolve(mood);
        let prompt = build_listing_prompt(mood, &genres, DEFAULT_TRACK_COUNT);

        let messages = vec![Message {
            role: "user".to_string(),
            content: prompt,
        }];

        self.chat(messages, Some(SYSTEM_PROMPT.to_string())).await
    }

    /// Generate a playlist for a mood.
    ///
    /// An empty vector means the service answered but nothing in its reply
    /// was usable; callers should offer a retry rather than treat it as a
    /// hard failure.
    pub async fn generate_playlist(&self, mood: &str) -> Result<Vec<TrackRecord>, String> {
        let raw_listing = self.generate_listing(mood).await?;
        Ok(extract_tracks(&raw_listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: OPENAI_MODEL.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: "some prompt".to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-3.5-turbo\""));
        assert!(json.contains("\"max_tokens\":500"));
        assert!(json.contains("music recommender bot"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "1. \"Waves\" Artist: Tide Album: Shoreline"
                    },
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let body = &response.choices[0].message.content;
        let tracks = extract_tracks(body);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Waves");
    }
}
