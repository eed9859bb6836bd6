pub mod download;
pub mod http_client;
pub mod resolver;

pub use download::*;
pub use resolver::*;

// 具体类型导出以保持API可用性
pub use resolver::{BinaryResolver, ResolvedBinary};
