use crate::config::GenerationConfig;
use crate::store::ProjectStore;

#[derive(Clone)]
pub struct GenerationState {
    pub config: GenerationConfig,
    pub client: reqwest::Client,
}

impl GenerationState {
    pub fn new(config: GenerationConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

pub struct AppState {
    pub store: ProjectStore,
    pub generation: GenerationState,
}
