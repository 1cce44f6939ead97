//! # 图标写盘模块
//!
//! 将 `IconArtifact` 编码为 RGBA PNG 并写入目标路径。已存在的同名文件会被直接覆盖，
//! 不做存在性检查或备份，重复执行即为幂等的重新生成。

use std::path::Path;

use image::ImageFormat;

use super::source::IconArtifact;
use super::IconRenderer;

impl IconRenderer {
    pub(super) fn write_icon(artifact: &IconArtifact, path: &Path) -> Result<(), String> {
        if path.is_dir() {
            return Err("目标路径是一个目录".to_string());
        }

        artifact
            .pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| format!("保存图标失败：{}", e))?;

        log::debug!(
            "💾 已写入 {}（{}x{}）",
            path.display(),
            artifact.size,
            artifact.size
        );

        Ok(())
    }

    /// 确保输出目录存在，不存在时递归创建。
    pub(super) fn ensure_output_dir(dir: &Path) -> Result<(), String> {
        if dir.is_dir() {
            return Ok(());
        }

        std::fs::create_dir_all(dir).map_err(|e| format!("创建输出目录失败：{}", e))?;
        log::info!("📂 已创建输出目录：{}", dir.display());
        Ok(())
    }
}
