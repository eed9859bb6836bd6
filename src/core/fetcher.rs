use std::sync::Arc;

use tokio::fs;

use crate::core::config::FetchConfig;
use crate::error::FetchError;
use crate::infrastructure::progress::FetchReporter;
use crate::infrastructure::remote::download::download_to_file;
use crate::infrastructure::remote::http_client;
use crate::infrastructure::remote::resolver::{BinaryResolver, ResolvedBinary};

/// 单个版本的处理结果，仅用于上报
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 下载完成
    Downloaded,
    /// 目标文件已存在，未重新下载
    AlreadyPresent,
    /// 该版本没有匹配固定参数的稳定发行版
    NotFound,
    /// 网络或 HTTP 错误
    NetworkError(String),
    /// 其他未预期的错误
    UnknownError(String),
}

/// 单版本下载器：建目录、解析、查重、流式写盘
pub struct Fetcher {
    config: FetchConfig,
    resolver: BinaryResolver,
    reporter: Arc<dyn FetchReporter>,
}

impl Fetcher {
    pub fn new(
        config: FetchConfig,
        reporter: Arc<dyn FetchReporter>,
    ) -> Result<Self, reqwest::Error> {
        let client = http_client::build_client()?;
        let resolver = BinaryResolver::new(client, &config);
        Ok(Self {
            config,
            resolver,
            reporter,
        })
    }

    /// 处理一个主版本
    ///
    /// 任何失败都被归类为 FetchOutcome 并上报，绝不向调用方抛出，
    /// 单个版本的失败不影响后续版本。
    pub async fn process(&self, version: u32) -> FetchOutcome {
        match self.process_inner(version).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let outcome = e.into_outcome();
                self.reporter.failed(version, &outcome);
                outcome
            }
        }
    }

    async fn process_inner(&self, version: u32) -> Result<FetchOutcome, FetchError> {
        let version_dir = self.config.version_dir(version);
        self.reporter.version_started(version, &version_dir);

        // 目录先于解析创建，解析失败时留下空目录
        fs::create_dir_all(&version_dir).await?;

        self.reporter
            .resolving(&self.resolver.latest_binary_url(version));

        let ResolvedBinary {
            file_name,
            size_hint,
            response,
        } = self.resolver.resolve(version).await?;

        // 仅按路径判断是否已下载过，不做内容比对
        let dest = version_dir.join(&file_name);
        if fs::try_exists(&dest).await? {
            self.reporter.already_present(&dest);
            return Ok(FetchOutcome::AlreadyPresent);
        }

        self.reporter.download_started(&file_name, size_hint, &dest);

        let reporter = Arc::clone(&self.reporter);
        download_to_file(response, &dest, move |written| {
            reporter.progress(written, size_hint)
        })
        .await?;

        self.reporter.download_finished(&dest);
        Ok(FetchOutcome::Downloaded)
    }
}
