#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("unknown image kind: {0}")]
    UnknownImageKind(String),
    #[error("invalid project directory: {0}")]
    InvalidProjectDir(String),
    #[error("failed to serialize layout: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize layout: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
}

pub type ProjectResult<T> = std::result::Result<T, ProjectError>;
