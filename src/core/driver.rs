use std::sync::Arc;

use crate::core::config::FetchConfig;
use crate::core::fetcher::Fetcher;
use crate::infrastructure::progress::FetchReporter;

/// 按版本升序驱动下载流程
///
/// 每个版本完整处理结束后才开始下一个，版本之间互不影响。
pub struct VersionDriver {
    config: FetchConfig,
    fetcher: Fetcher,
    reporter: Arc<dyn FetchReporter>,
}

impl VersionDriver {
    pub fn new(
        config: FetchConfig,
        reporter: Arc<dyn FetchReporter>,
    ) -> Result<Self, reqwest::Error> {
        let fetcher = Fetcher::new(config.clone(), Arc::clone(&reporter))?;
        Ok(Self {
            config,
            fetcher,
            reporter,
        })
    }

    /// 逐个处理配置范围内的所有主版本
    pub async fn run_all(&self) {
        self.reporter.run_started(&self.config);

        for version in self.config.versions() {
            self.fetcher.process(version).await;
        }

        self.reporter.run_finished();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::progress::SilentReporter;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn latest_path(version: u32) -> String {
        format!("/v3/binary/latest/{}/ga/linux/x64/jdk/hotspot/normal/eclipse", version)
    }

    #[tokio::test]
    async fn test_run_all_continues_after_failures() {
        let server = MockServer::start().await;

        // 版本 8 正常下载，版本 9 没有发行版，版本 10 服务器错误
        Mock::given(method("GET"))
            .and(path(latest_path(8)))
            .respond_with(ResponseTemplate::new(302).insert_header(
                "Location",
                format!("{}/files/OpenJDK8U-jdk.tar.gz", server.uri()).as_str(),
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/files/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jdk8".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(latest_path(9)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(latest_path(10)))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let config = FetchConfig {
            api_base_url: server.uri(),
            first_version: 8,
            last_version: 10,
            output_dir: dir.path().to_path_buf(),
            resolve_timeout_secs: 1,
            ..FetchConfig::default()
        };

        let driver = VersionDriver::new(config, Arc::new(SilentReporter)).unwrap();
        driver.run_all().await;

        // 三个版本目录都存在，失败的版本没有中断后续处理
        assert!(dir.path().join("jdk8/OpenJDK8U-jdk.tar.gz").is_file());
        assert!(dir.path().join("jdk9").is_dir());
        assert_eq!(std::fs::read_dir(dir.path().join("jdk9")).unwrap().count(), 0);
        assert!(dir.path().join("jdk10").is_dir());
        assert_eq!(std::fs::read_dir(dir.path().join("jdk10")).unwrap().count(), 0);
    }
}
