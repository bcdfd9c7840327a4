use anyhow::{Error, Result, anyhow};

use crate::openai::{Message, Role, completion};

/// Answers one question at a time against an OpenAI compatible API.
///
/// Each call is an independent round: the transcript is never sent
/// back to the model. Failures are folded into the returned string
/// rather than surfaced as errors, so the transcript always gets an
/// assistant line for every dispatched question.
pub struct Responder {
    api_hostname: String,
    model: String,
    system_message: String,
}

impl Responder {
    pub fn new(api_hostname: &str, model: &str, system_message: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            model: model.to_string(),
            system_message: system_message.to_string(),
        }
    }

    /// Returns the top completion's text verbatim, or an
    /// "An error occurred: ..." line when anything goes wrong
    /// contacting or parsing the upstream response. Callers are
    /// expected to gate on non-empty questions before calling.
    pub async fn answer(&self, question: &str, api_key: &str) -> String {
        match self.try_answer(question, api_key).await {
            Ok(answer) => answer,
            Err(e) => format!("An error occurred: {}", e),
        }
    }

    async fn try_answer(&self, question: &str, api_key: &str) -> Result<String, Error> {
        let messages = vec![
            Message::new(Role::System, &self.system_message),
            Message::new(Role::User, question),
        ];

        let resp = completion(&messages, &self.api_hostname, api_key, &self.model).await?;

        resp["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(anyhow!("No message received. Resp:\n\n {}", resp))
    }
}
