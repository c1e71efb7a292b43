use thiserror::Error;

/// 接口调用错误
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("网络错误: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ApiError {
    /// 展示给用户的文本；服务端错误原样返回其 `message`
    pub fn message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, AppError>;
