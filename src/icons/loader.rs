//! # 源图加载与解码模块
//!
//! ## 设计思路
//!
//! 把“路径 → 字节 → 图像 → RGBA”集中在一处，并在“尽可能早”的阶段执行输入校验：
//! 先看存在性与文件体积，再看 magic bytes，再读 header 尺寸，最后才完整解码。
//! 任何一步失败都归为 `IconError::SourceLoad`，此时尚未产生任何输出。
//!
//! ## 实现思路
//!
//! 1. metadata 体积限制 + 读取
//! 2. `infer` 签名校验
//! 3. header 尺寸 → 像素 / 内存上限
//! 4. 完整解码并统一转换为 RGBA8（缺失 alpha 时补为不透明）

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView};

use super::source::SourceImage;
use super::{IconError, IconRenderer, RenderConfig};

impl IconRenderer {
    /// 从本地路径加载并解码源图。
    pub(super) fn load_source(
        &self,
        path: &Path,
        config: &RenderConfig,
    ) -> Result<SourceImage, IconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        let load_error = |reason: String| IconError::SourceLoad {
            path: path.to_path_buf(),
            reason,
        };

        if !path.exists() {
            return Err(load_error("文件不存在".to_string()));
        }

        let metadata =
            std::fs::metadata(path).map_err(|e| load_error(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(load_error("路径不是普通文件".to_string()));
        }

        if metadata.len() > config.max_file_size {
            return Err(load_error(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| load_error(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes).map_err(load_error)?;

        let (header_width, header_height) =
            Self::inspect_dimensions_from_memory(&bytes).map_err(load_error)?;
        Self::validate_decode_limits(config, header_width, header_height).map_err(load_error)?;

        let decoded = Self::decode_with_limits(&bytes, config).map_err(load_error)?;

        let (width, height) = decoded.dimensions();
        Self::validate_decode_limits(config, width, height).map_err(load_error)?;

        let source = Self::into_rgba_source(decoded);

        log::info!(
            "✅ 源图解码成功 - 尺寸: {}x{} 原生 alpha: {}",
            source.width(),
            source.height(),
            source.had_alpha()
        );

        Ok(source)
    }

    /// 统一转换为 RGBA8；不带 alpha 的格式由 `to_rgba8` 补齐为 255。
    pub(super) fn into_rgba_source(decoded: DynamicImage) -> SourceImage {
        let had_alpha = decoded.color().has_alpha();
        let pixels = match decoded {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => other.to_rgba8(),
        };

        SourceImage { pixels, had_alpha }
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), String> {
        if bytes.is_empty() {
            return Err("图片内容为空".to_string());
        }

        let kind = infer::get(bytes).ok_or_else(|| "无法识别图片类型".to_string())?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(format!("文件签名不是图片类型：{}", kind.mime_type()));
        }

        Ok(())
    }

    /// 仅通过 header 读取宽高，用于在完整解码前做上限检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), String> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| format!("无法识别图片格式：{}", e))?;

        reader
            .into_dimensions()
            .map_err(|e| format!("无法读取图片尺寸：{}", e))
    }

    /// 完整解码；`image` 自带的分配上限跟随配置放宽，避免其默认 512 MiB 拦截大图。
    fn decode_with_limits(bytes: &[u8], config: &RenderConfig) -> Result<DynamicImage, String> {
        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| format!("无法识别图片格式：{}", e))?;

        let mut limits = image::Limits::default();
        // 解码器中间缓冲可能超过最终 RGBA 大小
        limits.max_alloc = Some(config.max_decoded_bytes.saturating_mul(2));
        reader.limits(limits);

        reader.decode().map_err(|e| format!("图片解码失败：{}", e))
    }

    fn validate_decode_limits(config: &RenderConfig, width: u32, height: u32) -> Result<(), String> {
        if width == 0 || height == 0 {
            return Err(format!("图片尺寸无效：{}x{}", width, height));
        }

        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| "图片像素数溢出".to_string())?;

        if pixels > config.max_decoded_pixels {
            return Err(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            ));
        }

        let estimated = pixels
            .checked_mul(4)
            .ok_or_else(|| "图片解码内存估算溢出".to_string())?;

        if estimated > config.max_decoded_bytes {
            return Err(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            ));
        }

        Ok(())
    }
}
