use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dataset_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value: {}", e))?,

            // Absent means the embedded snapshot is served
            dataset_path: env::var("DATASET_PATH").ok().map(PathBuf::from),
        })
    }
}
