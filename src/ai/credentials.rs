// Secure credential storage for API keys
//
// Uses OS-native secure storage:
// - macOS: Keychain
// - Windows: Credential Manager
// - Linux: Secret Service (GNOME/KDE)

use keyring::Entry;

const SERVICE_NAME: &str = "com.moodtunes.app";
const API_KEY_NAME: &str = "openai_api_key";

pub struct CredentialManager;

impl CredentialManager {
    /// Store the OpenAI API key in the OS keychain
    pub fn store_api_key(key: &str) -> Result<(), String> {
        // OpenAI keys start with "sk-"
        if !key.starts_with("sk-") {
            return Err("Invalid API key format. OpenAI API keys should start with 'sk-'".to_string());
        }

        if key.len() < 20 {
            return Err("API key appears too short. Please check and try again.".to_string());
        }

        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        entry
            .set_password(key)
            .map_err(|e| format!("Failed to store API key: {}", e))?;

        Ok(())
    }

    /// Retrieve the OpenAI API key from the OS keychain
    pub fn retrieve_api_key() -> Result<Option<String>, String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        match entry.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                eprintln!("Failed to retrieve API key: {}", e);
                Err(format!("Failed to retrieve API key: {}", e))
            }
        }
    }

    /// Delete the OpenAI API key from the OS keychain
    pub fn delete_api_key() -> Result<(), String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_NAME)
            .map_err(|e| format!("Failed to access keychain: {}", e))?;

        entry
            .delete_credential()
            .map_err(|e| format!("Failed to delete API key: {}", e))?;

        Ok(())
    }

    /// Check if an API key is stored (without exposing it)
    pub fn has_api_key() -> Result<bool, String> {
        Ok(Self::retrieve_api_key()?.is_some())
    }
}
