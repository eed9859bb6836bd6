// 核心模块
pub mod core;
pub mod error;
pub mod infrastructure;

// 重新导出常用类型
pub use crate::core::config::{FetchConfig, ReleaseProfile};
pub use crate::core::driver::VersionDriver;
pub use crate::core::fetcher::{FetchOutcome, Fetcher};
pub use crate::error::FetchError;
pub use crate::infrastructure::progress::{ConsoleReporter, FetchReporter, SilentReporter};
pub use crate::infrastructure::remote::resolver::{BinaryResolver, ResolvedBinary};
// 使用命名空间导入常量，避免冲突
pub use crate::core::constants as app_constants;
