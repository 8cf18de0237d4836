use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub channel_secret: String,
    pub channel_token: String,
    pub puzzle_api_url: String,
    pub puzzle_trigger: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            channel_secret: env::var("LINE_CHANNEL_SECRET")
                .expect("LINE_CHANNEL_SECRET must be set"),
            channel_token: env::var("LINE_CHANNEL_TOKEN")
                .expect("LINE_CHANNEL_TOKEN must be set"),
            puzzle_api_url: env::var("PUZZLE_API_URL")
                .expect("PUZZLE_API_URL must be set"),
            puzzle_trigger: env::var("PUZZLE_TRIGGER")
                .unwrap_or_else(|_| "puzzle".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
