use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use domain_tracker::IntakeConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub intake: IntakeConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?; // CORS_ORIGINS=http://localhost:3000
        let intake = IntakeConfig::from_env()?; // INTAKE_TITLE_MAX_CHARS=80

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            intake,
            environment,
        })
    }
}
