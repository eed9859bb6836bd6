use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

use crate::core::config::{FetchConfig, ReleaseProfile};
use crate::error::FetchError;

/// 解析结果：重定向后的最终下载流及派生出的文件名
pub struct ResolvedBinary {
    /// 从最终 URL 派生出的文件名（已解码百分号编码）
    pub file_name: String,
    /// content-length 响应头，仅用于进度显示，可能缺失
    pub size_hint: Option<u64>,
    /// 尚未消费的响应体（流式）
    pub response: Response,
}

/// 针对 Adoptium "latest binary" 目录接口的解析器
///
/// 把主版本号和固定的发行版参数拼成请求地址，跟随重定向拿到最终的
/// 文件流。不负责写盘。
pub struct BinaryResolver {
    client: Client,
    base_url: String,
    profile: ReleaseProfile,
    resolve_timeout: Duration,
}

impl BinaryResolver {
    pub fn new(client: Client, config: &FetchConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            profile: config.profile.clone(),
            resolve_timeout: Duration::from_secs(config.resolve_timeout_secs),
        }
    }

    /// 拼接指定主版本的 latest binary 请求地址
    pub fn latest_binary_url(&self, version: u32) -> String {
        let p = &self.profile;
        format!(
            "{}/v3/binary/latest/{}/{}/{}/{}/{}/{}/{}/{}",
            self.base_url,
            version,
            p.release_type,
            p.os,
            p.arch,
            p.image_type,
            p.jvm_impl,
            p.heap_size,
            p.vendor
        )
    }

    /// 解析指定主版本，返回未消费的文件流
    ///
    /// 超时只约束到响应头返回为止，不约束之后的流式读取。
    pub async fn resolve(&self, version: u32) -> Result<ResolvedBinary, FetchError> {
        let url = self.latest_binary_url(version);

        let response = tokio::time::timeout(self.resolve_timeout, self.client.get(&url).send())
            .await
            .map_err(|_| FetchError::Timeout(self.resolve_timeout.as_secs()))??;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let file_name = file_name_from_url(response.url())?;
        let size_hint = response.content_length();

        Ok(ResolvedBinary {
            file_name,
            size_hint,
            response,
        })
    }
}

/// 从最终 URL 的路径最后一段派生文件名，并解码百分号编码
///
/// 文件名只信任服务器重定向后的地址，不信任调用方。
pub fn file_name_from_url(url: &Url) -> Result<String, FetchError> {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| FetchError::InvalidName(url.to_string()))?;

    let decoded = urlencoding::decode(segment)
        .map_err(|_| FetchError::InvalidName(segment.to_string()))?;

    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_binary_url_format() {
        let resolver = BinaryResolver::new(
            Client::new(),
            &FetchConfig::default(),
        );
        assert_eq!(
            resolver.latest_binary_url(8),
            "https://api.adoptium.net/v3/binary/latest/8/ga/linux/x64/jdk/hotspot/normal/eclipse"
        );
    }

    #[test]
    fn test_latest_binary_url_trims_trailing_slash() {
        let config = FetchConfig {
            api_base_url: "http://localhost:8080/".to_string(),
            ..FetchConfig::default()
        };
        let resolver = BinaryResolver::new(Client::new(), &config);
        assert!(resolver
            .latest_binary_url(11)
            .starts_with("http://localhost:8080/v3/binary/latest/11/"));
    }

    #[test]
    fn test_file_name_from_url_takes_last_segment() {
        let url = Url::parse(
            "https://github.com/adoptium/temurin8-binaries/releases/download/jdk8u422-b05/OpenJDK8U-jdk_x64_linux_hotspot_8u422b05.tar.gz",
        )
        .unwrap();
        assert_eq!(
            file_name_from_url(&url).unwrap(),
            "OpenJDK8U-jdk_x64_linux_hotspot_8u422b05.tar.gz"
        );
    }

    #[test]
    fn test_file_name_from_url_decodes_percent_encoding() {
        let url = Url::parse("https://example.com/files/OpenJDK8U%2Bjdk%20linux.tar.gz").unwrap();
        assert_eq!(file_name_from_url(&url).unwrap(), "OpenJDK8U+jdk linux.tar.gz");
    }

    #[test]
    fn test_file_name_from_url_rejects_empty_path() {
        let url = Url::parse("https://example.com/").unwrap();
        assert!(matches!(
            file_name_from_url(&url),
            Err(FetchError::InvalidName(_))
        ));
    }
}
