use std::path::PathBuf;

pub struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("SIGREPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("sigreport")
            });

        let db_path = data_dir.join("signatures.db");

        Self { data_dir, db_path }
    }
}
