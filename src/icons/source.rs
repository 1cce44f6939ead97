//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `SourceImage` 表示已解码、只读共享的 RGBA 源图
//! - `IconArtifact` 表示某个尺寸的降采样结果，写盘后即丢弃
//! - `RenderedIcon` 表示返回给调用方的单尺寸结果

use std::path::PathBuf;

use image::RgbaImage;

/// 解码阶段输出：四通道 RGBA 源图。
///
/// 创建后不再修改；并行模式下以 `&SourceImage` 在线程间共享。
pub struct SourceImage {
    pub(crate) pixels: RgbaImage,
    /// 源图是否自带 alpha 通道（否则为补齐的不透明 alpha）。
    pub(crate) had_alpha: bool,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn had_alpha(&self) -> bool {
        self.had_alpha
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 降采样阶段输出：`size × size` 的 RGBA 图标。
pub(crate) struct IconArtifact {
    pub(crate) size: u32,
    pub(crate) pixels: RgbaImage,
}

/// 单个尺寸的渲染结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    /// 图标边长（像素）。
    pub size: u32,
    /// 输出文件名，例如 `icon-32.png`。
    pub file_name: String,
    /// 输出文件完整路径。
    pub path: PathBuf,
}
