use nf_providers::ProviderManager;

pub struct AppState {
    pub manager: ProviderManager,
}

impl AppState {
    pub fn new(manager: ProviderManager) -> Self {
        Self { manager }
    }
}
