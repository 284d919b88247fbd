/// Failures crossing the HTTP boundary. Business errors are responses the
/// server answered with a non-success envelope code; everything else is
/// transport or decoding trouble.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("业务错误 {code}: {message}")]
    Business { code: i64, message: String },

    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),

    #[error("响应解析失败: {0}")]
    Parse(String),
}
