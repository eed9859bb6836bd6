use reqwest::Client;
use std::time::Duration;

use crate::core::constants::network;

/// 构建共享的 HTTP 客户端
///
/// 默认跟随重定向。这里只设置连接超时，解析阶段的整体超时由调用方
/// 控制，下载阶段不设超时。
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(network::CONNECT_TIMEOUT_SECS))
        .user_agent(network::USER_AGENT)
        .build()
}
