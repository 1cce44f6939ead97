//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `RenderConfig`，取代原先写死的文件名、工作目录与尺寸列表，
//! 让调用方（CLI 或测试）以显式参数驱动渲染，便于用临时目录与合成图片做隔离测试。
//!
//! ## 实现思路
//!
//! - `Default` 提供开箱即用的配置：当前目录、`{16, 32, 80, 128}`、Lanczos3、顺序执行。
//! - `ResampleFilter` 只收录高质量滤镜，nearest / bilinear 在解析阶段直接拒绝。
//! - `validate` 在触碰文件系统之前完成全部参数校验。

use std::path::{Path, PathBuf};

use fast_image_resize as fr;
use image::imageops::FilterType;

use super::IconError;

/// 默认源图路径。
pub const DEFAULT_SOURCE: &str = "ai_brain_base.png";

/// 默认图标尺寸（像素边长）。
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 80, 128];

/// 默认解码像素上限，与 Pillow 解压炸弹的报错阈值一致（约 179 MP）。
pub const DEFAULT_MAX_DECODED_PIXELS: u64 = 178_956_970;

/// 输出文件名前缀，完整文件名为 `icon-<size>.png`。
pub const ICON_FILE_PREFIX: &str = "icon";

/// 输出文件扩展名（固定 PNG 编码）。
pub const ICON_FILE_EXTENSION: &str = "png";

/// 降采样滤镜。
///
/// - `Lanczos3`：窗口化 sinc，缩小时细节保留最好（默认）
/// - `CatmullRom`：三次卷积，边缘略锐
/// - `Mitchell`：三次卷积，振铃更少
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
}

impl ResampleFilter {
    /// 从外部字符串解析滤镜。
    ///
    /// # 示例
    /// ```rust
    /// use icon_renderer::icons::ResampleFilter;
    ///
    /// let f = ResampleFilter::from_str("Lanczos3")?;
    /// assert_eq!(f.as_str(), "lanczos3");
    /// # Ok::<(), icon_renderer::icons::IconError>(())
    /// ```
    pub fn from_str(filter: &str) -> Result<Self, IconError> {
        match filter.trim().to_lowercase().as_str() {
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            "catmull-rom" | "catmullrom" => Ok(Self::CatmullRom),
            "mitchell" => Ok(Self::Mitchell),
            other => Err(IconError::InvalidConfig(format!(
                "未知或不支持的滤镜：{}（可选：lanczos3 / catmull-rom / mitchell）",
                other
            ))),
        }
    }

    /// 将滤镜输出为稳定字符串，供日志与 CLI 展示。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lanczos3 => "lanczos3",
            Self::CatmullRom => "catmull-rom",
            Self::Mitchell => "mitchell",
        }
    }

    pub(crate) fn to_fast_filter(self) -> fr::FilterType {
        match self {
            Self::Lanczos3 => fr::FilterType::Lanczos3,
            Self::CatmullRom => fr::FilterType::CatmullRom,
            Self::Mitchell => fr::FilterType::Mitchell,
        }
    }

    /// `image` 回退路径使用的等价滤镜（`Gaussian` 是其中最接近 Mitchell 的平滑核）。
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Mitchell => FilterType::Gaussian,
        }
    }
}

/// 各尺寸的执行方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// 按尺寸列表顺序逐个渲染，通知顺序与列表一致。
    #[default]
    Sequential,
    /// 在 rayon 线程池上并行渲染；返回值仍按列表排序，但通知按完成顺序到达。
    Parallel,
}

/// 图标渲染配置。
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 目标尺寸列表（有序，允许重复，重复项会覆盖同一文件）。
    pub sizes: Vec<u32>,
    /// 降采样滤镜。
    pub filter: ResampleFilter,
    /// 执行方式。
    pub execution: ExecutionMode,
    /// 读取源图时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            filter: ResampleFilter::default(),
            execution: ExecutionMode::default(),
            max_file_size: 1024 * 1024 * 1024,
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
            max_decoded_bytes: DEFAULT_MAX_DECODED_PIXELS * 4,
        }
    }
}

impl RenderConfig {
    /// 以默认策略构建指定输出目录与尺寸的配置。
    pub fn new(output_dir: impl Into<PathBuf>, sizes: impl Into<Vec<u32>>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sizes: sizes.into(),
            ..Self::default()
        }
    }

    /// 调整解码像素上限，内存上限按 RGBA 每像素 4 字节同步缩放。
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_decoded_pixels = max_pixels;
        self.max_decoded_bytes = max_pixels.saturating_mul(4);
        self
    }

    /// 校验尺寸列表。
    pub(crate) fn validate(&self) -> Result<(), IconError> {
        if self.sizes.is_empty() {
            return Err(IconError::InvalidConfig("尺寸列表不能为空".to_string()));
        }

        for &size in &self.sizes {
            if size == 0 {
                return Err(IconError::InvalidConfig("图标尺寸必须为正整数".to_string()));
            }
        }

        let mut seen = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            if seen.contains(&size) {
                log::warn!("⚠️ 尺寸 {} 重复出现，后一次会覆盖同名文件", size);
            } else {
                seen.push(size);
            }
        }

        Ok(())
    }

    /// 指定尺寸对应的输出路径。
    pub fn output_path_for(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }

    pub(crate) fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// 按命名约定生成输出文件名：`icon-<size>.png`。
pub fn icon_file_name(size: u32) -> String {
    format!("{}-{}.{}", ICON_FILE_PREFIX, size, ICON_FILE_EXTENSION)
}

/// 解析逗号分隔的尺寸列表，例如 `"16,32,80,128"`。
pub fn parse_sizes(raw: &str) -> Result<Vec<u32>, IconError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|e| IconError::InvalidConfig(format!("无法解析尺寸 '{}'：{}", part, e)))
        })
        .collect()
}
