//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标渲染链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配（例如取出失败的尺寸）。

use std::path::PathBuf;

/// 图标渲染统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`，最终打印到 stderr 并以非零码退出。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源图不存在、不可读或无法解码。此时不会产生任何输出文件。
    #[error("源图加载失败（{}）：{reason}", .path.display())]
    SourceLoad { path: PathBuf, reason: String },

    /// 某个尺寸降采样或写盘失败。此前已写入的尺寸保留在磁盘上，不回滚。
    #[error("图标写入失败（尺寸 {size}，路径 {}）：{reason}", .path.display())]
    IconWrite {
        size: u32,
        path: PathBuf,
        reason: String,
    },

    /// 输出目录不存在且无法创建。
    #[error("输出目录不可用（{}）：{reason}", .path.display())]
    OutputDir { path: PathBuf, reason: String },

    /// 尺寸列表或滤镜名称等参数不合法。
    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

impl IconError {
    /// 若错误与某个具体尺寸相关，返回该尺寸。
    pub fn failed_size(&self) -> Option<u32> {
        match self {
            Self::IconWrite { size, .. } => Some(*size),
            _ => None,
        }
    }
}
