//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconRenderer` 只负责流程编排，不直接打印控制台输出。
//! 处理链路固定为：
//! 1. 解码源图（失败则直接返回，不产生任何输出）
//! 2. 确保输出目录存在
//! 3. 对每个尺寸：降采样 → 写盘 → 通知
//!
//! ## 实现思路
//!
//! - 构造时完成配置校验，渲染阶段不再出现参数类错误。
//! - 每个尺寸是一个独立、已提交的单元：失败时不回滚此前写入的文件。
//! - 结果以 `Vec<RenderedIcon>` 返回；需要“边做边报”的调用方通过进度回调获取通知。
//! - 记录 `load/resize/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use super::config::icon_file_name;
use super::source::{RenderedIcon, SourceImage};
use super::{ExecutionMode, IconError, RenderConfig};

/// 图标渲染器。
pub struct IconRenderer {
    pub(super) config: RenderConfig,
}

impl IconRenderer {
    /// 根据配置创建渲染器，非法尺寸列表在此处被拒绝。
    ///
    /// # 示例
    /// ```rust
    /// use icon_renderer::icons::{IconRenderer, RenderConfig};
    ///
    /// let renderer = IconRenderer::new(RenderConfig::new("out", vec![16, 32]))?;
    /// assert_eq!(renderer.config().sizes, vec![16, 32]);
    /// # Ok::<(), icon_renderer::icons::IconError>(())
    /// ```
    pub fn new(config: RenderConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// 处理主入口：渲染全部尺寸并返回每个尺寸的结果。
    pub fn render(&self, source_path: impl AsRef<Path>) -> Result<Vec<RenderedIcon>, IconError> {
        self.render_with_progress(source_path, |_| {})
    }

    /// 渲染全部尺寸，每写完一个文件立即调用一次 `on_saved`。
    ///
    /// 顺序模式下回调顺序与尺寸列表一致；并行模式下按完成顺序回调。
    /// 某个尺寸失败时不会为该尺寸回调，已写入的文件保留在磁盘上。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_renderer::icons::{IconRenderer, RenderConfig};
    ///
    /// let renderer = IconRenderer::new(RenderConfig::default())?;
    /// renderer.render_with_progress("ai_brain_base.png", |icon| {
    ///     println!("Saved {}", icon.file_name);
    /// })?;
    /// # Ok::<(), icon_renderer::icons::IconError>(())
    /// ```
    pub fn render_with_progress<P>(
        &self,
        source_path: impl AsRef<Path>,
        on_saved: P,
    ) -> Result<Vec<RenderedIcon>, IconError>
    where
        P: Fn(&RenderedIcon) + Send + Sync,
    {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.load_source(source_path.as_ref(), config)?;
        let load_elapsed = load_start.elapsed();

        Self::ensure_output_dir(config.output_dir()).map_err(|reason| IconError::OutputDir {
            path: config.output_dir().to_path_buf(),
            reason,
        })?;

        let resize_start = Instant::now();
        let rendered = match config.execution {
            ExecutionMode::Sequential => config
                .sizes
                .iter()
                .map(|&size| self.render_one(&source, size, &on_saved))
                .collect::<Result<Vec<_>, _>>()?,
            ExecutionMode::Parallel => config
                .sizes
                .par_iter()
                .map(|&size| self.render_one(&source, size, &on_saved))
                .collect::<Result<Vec<_>, _>>()?,
        };
        let resize_elapsed = resize_start.elapsed();

        log::info!(
            "✅ 图标渲染完成 - 数量={} 模式={:?} load={}ms resize={}ms total={}ms",
            rendered.len(),
            config.execution,
            load_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(rendered)
    }

    /// 单个尺寸：降采样 → 写盘 → 通知。
    fn render_one<P>(
        &self,
        source: &SourceImage,
        size: u32,
        on_saved: &P,
    ) -> Result<RenderedIcon, IconError>
    where
        P: Fn(&RenderedIcon) + Send + Sync,
    {
        let path = self.config.output_path_for(size);
        let write_error = |reason: String| IconError::IconWrite {
            size,
            path: path.clone(),
            reason,
        };

        let artifact = Self::resample(source, size, self.config.filter).map_err(write_error)?;
        Self::write_icon(&artifact, &path).map_err(write_error)?;

        let rendered = RenderedIcon {
            size,
            file_name: icon_file_name(size),
            path,
        };
        on_saved(&rendered);

        Ok(rendered)
    }
}

/// 便捷入口：在当前工作目录下按给定尺寸渲染图标，其余参数取默认值。
pub fn render_icons(
    source_path: impl AsRef<Path>,
    sizes: &[u32],
) -> Result<Vec<RenderedIcon>, IconError> {
    IconRenderer::new(RenderConfig::new(".", sizes.to_vec()))?.render(source_path)
}
