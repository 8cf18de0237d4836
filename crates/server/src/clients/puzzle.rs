use reqwest::Client;
use serde::Deserialize;

/// A random puzzle from the puzzle source: a board image to show the user
/// and the PGN whose first movetext token is the solution move.
#[derive(Debug, Clone, Deserialize)]
pub struct Puzzle {
    pub pgn: String,
    pub image: String,
}

/// Client for the external puzzle-source API.
#[derive(Clone)]
pub struct PuzzleClient {
    client: Client,
    api_url: String,
}

impl PuzzleClient {
    pub fn new(api_url: &str) -> Self {
        let client = Client::builder()
            .user_agent("ChessQuizBot/1.0")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    /// Fetch a random puzzle. Any transport or format failure is reported
    /// upward as an error, never as a wrong-answer verdict.
    pub async fn fetch_random(&self) -> Result<Puzzle, String> {
        let resp = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| format!("Puzzle request error: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Puzzle HTTP {}", resp.status()));
        }

        resp.json::<Puzzle>()
            .await
            .map_err(|e| format!("Puzzle JSON parse error: {e}"))
    }
}
