use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostgenError {
    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("无效的变量: {0}")]
    InvalidVariable(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("存在未满足的变量依赖: {0} 个问题")]
    UnresolvedDependencies(usize),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML 解析错误: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PostgenError {
    fn from(err: anyhow::Error) -> Self {
        PostgenError::Other(err.to_string())
    }
}

/// Result type for postgen crate
pub type Result<T> = std::result::Result<T, PostgenError>;
