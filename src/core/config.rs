use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_message: String,
    // When set, callers must supply their own API key with every
    // question and the process-wide key is never used
    pub require_session_key: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("ASKBOT_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("ASKBOT_LLM_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let system_message = env::var("ASKBOT_SYSTEM_MESSAGE").unwrap_or_else(|_| {
            "You are a helpful assistant. Please respond in full sentences.".to_string()
        });
        let require_session_key = env::var("ASKBOT_REQUIRE_SESSION_KEY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
            require_session_key,
        }
    }
}
