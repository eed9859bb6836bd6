use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use super::constants::{api, download, network};

/// 发行版筛选配置（Adoptium API 的固定查询参数）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseProfile {
    pub os: String,
    pub arch: String,
    pub image_type: String,
    pub jvm_impl: String,
    pub heap_size: String,
    pub vendor: String,
    pub release_type: String,
}

impl Default for ReleaseProfile {
    fn default() -> Self {
        Self {
            os: api::OS.to_string(),
            arch: api::ARCH.to_string(),
            image_type: api::IMAGE_TYPE.to_string(),
            jvm_impl: api::JVM_IMPL.to_string(),
            heap_size: api::HEAP_SIZE.to_string(),
            vendor: api::VENDOR.to_string(),
            release_type: api::RELEASE_TYPE.to_string(),
        }
    }
}

/// 下载器配置
///
/// 所有字段都有默认值，可通过工作目录下的 jdkdl.toml 覆盖。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Adoptium API 根地址
    pub api_base_url: String,
    /// 发行版筛选参数
    pub profile: ReleaseProfile,
    /// 起始主版本（含）
    pub first_version: u32,
    /// 结束主版本（含）
    pub last_version: u32,
    /// 版本目录的根路径
    pub output_dir: PathBuf,
    /// 解析请求超时时间（秒）
    pub resolve_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            profile: ReleaseProfile::default(),
            first_version: download::FIRST_VERSION,
            last_version: download::LAST_VERSION,
            output_dir: PathBuf::from("."),
            resolve_timeout_secs: network::RESOLVE_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    /// 从工作目录加载配置文件，不存在时使用默认配置
    pub fn load() -> Result<Self, String> {
        let config_path = PathBuf::from(download::CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("无法读取配置文件: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("解析配置文件失败: {}", e))
    }

    /// 要处理的主版本范围（升序）
    pub fn versions(&self) -> RangeInclusive<u32> {
        self.first_version..=self.last_version
    }

    /// 指定版本的目录名，如 8 -> "jdk8"
    pub fn version_dir_name(version: u32) -> String {
        format!("{}{}", download::VERSION_DIR_PREFIX, version)
    }

    /// 指定版本的目录完整路径
    pub fn version_dir(&self, version: u32) -> PathBuf {
        self.output_dir.join(Self::version_dir_name(version))
    }
}
