use std::sync::Arc;

use crate::config::Config;
use crate::gemini::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gemini = Arc::new(GeminiClient::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
        ));

        Self { config, gemini }
    }
}
