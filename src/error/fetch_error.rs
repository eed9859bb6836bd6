use std::io;
use thiserror::Error;

use crate::core::fetcher::FetchOutcome;

/// 下载过程中的内部错误类型
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    #[error("解析请求超时（{0} 秒）")]
    Timeout(u64),

    #[error("服务器返回状态码: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("未找到匹配的发行版")]
    NotFound,

    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),

    #[error("无法从下载地址解析文件名: {0}")]
    InvalidName(String),
}

impl FetchError {
    /// 将内部错误归类为对用户可见的处理结果
    ///
    /// 这是唯一的分类点：传输层失败、超时和非 404 的 HTTP 错误都算网络
    /// 错误，404 表示该版本没有匹配的发行版，其余一律归为未知错误。
    pub fn into_outcome(self) -> FetchOutcome {
        let detail = self.to_string();
        match self {
            FetchError::NotFound => FetchOutcome::NotFound,
            FetchError::Network(_) | FetchError::Timeout(_) | FetchError::HttpStatus(_) => {
                FetchOutcome::NetworkError(detail)
            }
            FetchError::Io(_) | FetchError::InvalidName(_) => FetchOutcome::UnknownError(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        assert_eq!(FetchError::NotFound.into_outcome(), FetchOutcome::NotFound);
    }

    #[test]
    fn test_timeout_and_status_map_to_network_error() {
        match FetchError::Timeout(20).into_outcome() {
            FetchOutcome::NetworkError(detail) => assert!(detail.contains("20")),
            other => panic!("意外的结果: {:?}", other),
        }
        match FetchError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR).into_outcome() {
            FetchOutcome::NetworkError(detail) => assert!(detail.contains("500")),
            other => panic!("意外的结果: {:?}", other),
        }
    }

    #[test]
    fn test_io_and_invalid_name_map_to_unknown_error() {
        let io_err = FetchError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(io_err.into_outcome(), FetchOutcome::UnknownError(_)));

        let name_err = FetchError::InvalidName("https://example.com/".to_string());
        assert!(matches!(name_err.into_outcome(), FetchOutcome::UnknownError(_)));
    }
}
