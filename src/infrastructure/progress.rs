use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;

use crate::core::config::FetchConfig;
use crate::core::fetcher::FetchOutcome;

/// 进度与状态上报接口
///
/// 下载逻辑只依赖这个接口，控制台输出可以在测试中整体替换掉。
pub trait FetchReporter: Send + Sync {
    /// 整个下载任务开始
    fn run_started(&self, config: &FetchConfig);
    /// 开始处理一个主版本
    fn version_started(&self, version: u32, dir: &Path);
    /// 正在请求解析接口
    fn resolving(&self, url: &str);
    /// 目标文件已存在，跳过下载
    fn already_present(&self, dest: &Path);
    /// 开始下载一个文件
    fn download_started(&self, file_name: &str, size_hint: Option<u64>, dest: &Path);
    /// 累计写入字节数更新
    fn progress(&self, written: u64, size_hint: Option<u64>);
    /// 单个文件下载完成
    fn download_finished(&self, dest: &Path);
    /// 单个版本处理失败
    fn failed(&self, version: u32, outcome: &FetchOutcome);
    /// 整个下载任务结束
    fn run_finished(&self);
}

/// 控制台实现：状态行加 indicatif 进度条
pub struct ConsoleReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn create_progress_bar(size_hint: Option<u64>) -> ProgressBar {
        match size_hint {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta}) {percent}%")
                        .unwrap()
                        .progress_chars("#>-"),
                );
                pb
            }
            // 服务器未返回 content-length 时总大小未知，只显示已写入量
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {bytes}")
                        .unwrap(),
                );
                pb
            }
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchReporter for ConsoleReporter {
    fn run_started(&self, config: &FetchConfig) {
        println!("{}", "-".repeat(60));
        println!(
            "开始下载 JDK (版本 {}-{}) for {} {}",
            config.first_version, config.last_version, config.profile.os, config.profile.arch
        );
        println!("每个版本的 JDK 将被保存到其专属的目录中 (例如 jdk8/, jdk11/)");
        println!("{}", "-".repeat(60));
    }

    fn version_started(&self, version: u32, dir: &Path) {
        println!("\n--- 正在处理 JDK {} (目标目录: {}/) ---", version, dir.display());
    }

    fn resolving(&self, url: &str) {
        println!("🔍 请求 API: {}", url);
    }

    fn already_present(&self, dest: &Path) {
        println!("✅ 文件已存在，跳过下载: {}", dest.display());
    }

    fn download_started(&self, file_name: &str, size_hint: Option<u64>, dest: &Path) {
        match size_hint {
            Some(total) => println!(
                "🚀 准备下载: {} ({:.2} MB)",
                file_name,
                total as f64 / (1024.0 * 1024.0)
            ),
            None => println!("🚀 准备下载: {} (大小未知)", file_name),
        }
        println!("   保存到: {}", dest.display());

        *self.bar.lock().unwrap() = Some(Self::create_progress_bar(size_hint));
    }

    fn progress(&self, written: u64, _size_hint: Option<u64>) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_position(written);
        }
    }

    fn download_finished(&self, dest: &Path) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
        println!("👍 下载完成: {}", dest.display());
    }

    fn failed(&self, version: u32, outcome: &FetchOutcome) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.abandon();
        }
        match outcome {
            FetchOutcome::NotFound => {
                println!("❌ 未找到 JDK {} 的可用稳定版，跳过。", version);
            }
            FetchOutcome::NetworkError(detail) => {
                println!("❌ 网络请求失败 (版本 {}): {}", version, detail);
            }
            FetchOutcome::UnknownError(detail) => {
                println!("❌ 发生未知错误 (版本 {}): {}", version, detail);
            }
            FetchOutcome::Downloaded | FetchOutcome::AlreadyPresent => {}
        }
    }

    fn run_finished(&self) {
        println!("\n🎉 所有下载任务已完成！");
    }
}

/// 静默实现，测试中使用
pub struct SilentReporter;

impl FetchReporter for SilentReporter {
    fn run_started(&self, _config: &FetchConfig) {}
    fn version_started(&self, _version: u32, _dir: &Path) {}
    fn resolving(&self, _url: &str) {}
    fn already_present(&self, _dest: &Path) {}
    fn download_started(&self, _file_name: &str, _size_hint: Option<u64>, _dest: &Path) {}
    fn progress(&self, _written: u64, _size_hint: Option<u64>) {}
    fn download_finished(&self, _dest: &Path) {}
    fn failed(&self, _version: u32, _outcome: &FetchOutcome) {}
    fn run_finished(&self) {}
}
