use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Deployment environment; "production" enables startup secret checks.
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub hf_api_token: SecretString,
    pub hf_model_id: String,
    /// Timeout for a single model call, in seconds.
    pub model_timeout_secs: u64,
    /// Overall budget for one generation request, in seconds. Zero disables
    /// the budget.
    pub generation_budget_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizcraft-local".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            hf_api_token: SecretString::from(
                env::var("HUGGING_FACE_TOKEN").unwrap_or_else(|_| "hf_token".to_string()),
            ),
            hf_model_id: env::var("HF_MODEL_ID")
                .unwrap_or_else(|_| "google/flan-t5-base".to_string()),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            generation_budget_secs: env::var("GENERATION_BUDGET_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.hf_api_token.expose_secret() == "hf_token" {
            panic!(
                "FATAL: HUGGING_FACE_TOKEN is using default value! Set HUGGING_FACE_TOKEN environment variable."
            );
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizcraft-test".to_string(),
            questions_collection: "questions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            hf_api_token: SecretString::from("test_hf_token".to_string()),
            hf_model_id: "google/flan-t5-base".to_string(),
            model_timeout_secs: 5,
            generation_budget_secs: 10,
        }
    }
}
