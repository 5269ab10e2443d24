use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
