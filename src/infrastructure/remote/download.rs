use futures_util::StreamExt;
use reqwest::Response;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::FetchError;

/// 通用的下载工具：把响应体流式写入目标文件并回调累计进度。
///
/// 目标文件以独占创建方式打开，已存在时直接报错，绝不覆盖。响应体
/// 按块消费，整个文件不会驻留内存。中途失败时已写入的部分保留在
/// 磁盘上，文件句柄和连接随作用域结束释放。
pub async fn download_to_file(
    response: Response,
    dest: &Path,
    progress: impl Fn(u64),
) -> Result<u64, FetchError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await?;

    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        progress(written);
    }

    file.flush().await?;

    Ok(written)
}
