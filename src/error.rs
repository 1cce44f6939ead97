//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义二进制入口使用的 `AppError`，把库层 `IconError` 与 CLI 层的参数错误
//! 收拢到同一个类型，入口处只需匹配一次即可决定提示文案与退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，`?` 即可上转。

use crate::icons::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标渲染流水线错误（加载 / 降采样 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 命令行参数不合法
    #[error("参数错误: {0}")]
    InvalidArgument(String),
}

impl AppError {
    /// 进程退出码：参数错误为 2，其余运行期错误为 1。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) | Self::Icon(IconError::InvalidConfig(_)) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn icon_error_passes_message_through() {
        let err: AppError = IconError::IconWrite {
            size: 80,
            path: PathBuf::from("icon-80.png"),
            reason: "disk full".to_string(),
        }
        .into();

        assert!(err.to_string().contains("icon-80.png"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn invalid_input_maps_to_usage_exit_code() {
        assert_eq!(AppError::InvalidArgument("x".to_string()).exit_code(), 2);
        assert_eq!(
            AppError::from(IconError::InvalidConfig("empty".to_string())).exit_code(),
            2
        );
    }
}
