//! 应用程序常量定义
//!
//! 本模块包含全局使用的常量，避免魔数并提供统一的配置值。

/// 网络相关常量
pub mod network {
    /// 解析请求超时时间（秒）
    pub const RESOLVE_TIMEOUT_SECS: u64 = 20;
    /// 连接超时时间（秒）
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// HTTP User-Agent
    pub const USER_AGENT: &str = concat!("jdkdl/", env!("CARGO_PKG_VERSION"));
}

/// Adoptium API 相关常量
pub mod api {
    /// API 根地址
    pub const DEFAULT_BASE_URL: &str = "https://api.adoptium.net";
    /// 发行类型：GA（稳定版）
    pub const RELEASE_TYPE: &str = "ga";
    /// 操作系统
    pub const OS: &str = "linux";
    /// CPU 架构
    pub const ARCH: &str = "x64";
    /// 镜像类型
    pub const IMAGE_TYPE: &str = "jdk";
    /// JVM 实现
    pub const JVM_IMPL: &str = "hotspot";
    /// 堆配置
    pub const HEAP_SIZE: &str = "normal";
    /// 发行商
    pub const VENDOR: &str = "eclipse";
}

/// 下载相关常量
pub mod download {
    /// 要下载的第一个 JDK 主版本（含）
    pub const FIRST_VERSION: u32 = 8;
    /// 要下载的最后一个 JDK 主版本（含）
    pub const LAST_VERSION: u32 = 21;
    /// 版本目录前缀，如 jdk8、jdk11
    pub const VERSION_DIR_PREFIX: &str = "jdk";
    /// 可选配置文件名（位于工作目录）
    pub const CONFIG_FILE_NAME: &str = "jdkdl.toml";
}
