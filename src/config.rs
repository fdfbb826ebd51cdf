use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub listen_port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl ServiceConfig {
    // required values fail here, at startup, with a readable message instead
    // of a cryptic driver error on the first request
    pub fn from_env() -> Self {
        let db_host = std::env::var("DB_HOST")
            .expect("Failed to determine DB_HOST from environment variables");

        let db_user = std::env::var("DB_USER")
            .expect("Failed to determine DB_USER from environment variables");

        let db_password = std::env::var("DB_PASSWORD")
            .expect("Failed to determine DB_PASSWORD from environment variables");

        let db_name = std::env::var("DB_NAME")
            .expect("Failed to determine DB_NAME from environment variables");

        let db_port = std::env::var("DB_PORT")
            .expect("Failed to determine DB_PORT from environment variables")
            .parse::<u16>()
            .expect("DB_PORT must be a valid port number");

        let listen_port = std::env::var("PORT")
            .expect("Failed to determine PORT from environment variables")
            .parse::<u16>()
            .expect("PORT must be a valid port number");

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(10);

        let acquire_timeout_secs = std::env::var("ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(60);

        Self {
            db_host,
            db_user,
            db_password,
            db_name,
            db_port,
            listen_port,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        }
    }
}
