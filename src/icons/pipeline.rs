//! # 降采样流水线模块
//!
//! ## 设计思路
//!
//! 每个目标尺寸只读访问同一份 `SourceImage`，产出一个独立的 `IconArtifact`。
//! 主路径使用 `fast_image_resize`（SIMD 卷积，自动处理 alpha 预乘），
//! 失败时回退 `image::imageops::resize`，保证任何情况下都使用高质量滤镜。
//!
//! ## 实现思路
//!
//! 1. 以源图 RGBA 缓冲构建 `fr` 源图像视图
//! 2. 按配置滤镜执行卷积缩放到 `size × size`
//! 3. 校验输出缓冲长度并包装为 `RgbaImage`

use fast_image_resize as fr;
use image::{ImageBuffer, Rgba, RgbaImage};

use super::source::{IconArtifact, SourceImage};
use super::{IconRenderer, ResampleFilter};

impl IconRenderer {
    /// 将源图降采样为指定边长的正方形图标。
    ///
    /// 源图非正方形时直接拉伸到正方形，与固定尺寸图标的约定一致。
    /// 错误以字符串返回，由编排层补上尺寸与路径后转为 `IconError::IconWrite`。
    pub(super) fn resample(
        source: &SourceImage,
        size: u32,
        filter: ResampleFilter,
    ) -> Result<IconArtifact, String> {
        let pixels = match Self::resize_with_fast_image_resize(source, size, filter) {
            Ok(resized) => resized,
            Err(reason) => {
                log::warn!(
                    "⚠️ fast_image_resize 降采样失败（尺寸 {}），回退 image::resize：{}",
                    size,
                    reason
                );
                image::imageops::resize(&source.pixels, size, size, filter.to_image_filter())
            }
        };

        if pixels.dimensions() != (size, size) {
            return Err(format!(
                "降采样输出尺寸异常：{}x{}",
                pixels.width(),
                pixels.height()
            ));
        }

        log::debug!(
            "🧩 降采样：{}x{} -> {}x{}（filter={}）",
            source.width(),
            source.height(),
            size,
            size,
            filter.as_str()
        );

        Ok(IconArtifact { size, pixels })
    }

    fn resize_with_fast_image_resize(
        source: &SourceImage,
        size: u32,
        filter: ResampleFilter,
    ) -> Result<RgbaImage, String> {
        let (src_width, src_height) = source.pixels.dimensions();

        let src_image = fr::images::ImageRef::new(
            src_width,
            src_height,
            source.pixels.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| format!("构建源图像视图失败：{}", e))?;

        let mut dst_image = fr::images::Image::new(size, size, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(filter.to_fast_filter()));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| format!("fast_image_resize 执行失败：{}", e))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(size, size, dst_image.into_vec())
            .ok_or_else(|| "fast_image_resize 输出缓冲长度异常".to_string())
    }
}
