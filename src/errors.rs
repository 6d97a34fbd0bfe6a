use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalityError {
    #[error("Error: {0}")]
    String(String),
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}

impl From<String> for LocalityError {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
