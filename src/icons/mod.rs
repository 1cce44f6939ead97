//! # 图标渲染模块（icons）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载校验 → 解码 → 逐尺寸降采样 → PNG 写盘 → 结果通知”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `renderer`：编排整条处理流水线（阶段耗时日志、顺序/并行执行）
//! - `loader`：负责源图读取、签名与尺寸上限校验、RGBA 转换
//! - `pipeline`：负责单尺寸降采样（fast_image_resize + image 回退）
//! - `writer`：负责输出目录与 PNG 覆盖写入
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（CLI 参数 → RenderConfig）
//!    ↓
//! renderer.rs（IconRenderer::render_with_progress）
//!    ├─ loader.rs（读取 + 校验 + 解码，失败即 SourceLoad）
//!    ├─ writer.rs（确保输出目录存在）
//!    └─ 对每个尺寸：
//!         ├─ pipeline.rs（降采样到 size × size）
//!         └─ writer.rs（写入 icon-<size>.png，失败即 IconWrite）
//!    ↓
//! Vec<RenderedIcon> / 进度回调 → "Saved icon-<size>.png"
//! ```

mod config;
mod error;
mod loader;
mod pipeline;
mod renderer;
mod source;
mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    icon_file_name, parse_sizes, ExecutionMode, RenderConfig, ResampleFilter, DEFAULT_SIZES,
    DEFAULT_SOURCE, ICON_FILE_EXTENSION, ICON_FILE_PREFIX,
};
pub use error::IconError;
pub use renderer::{render_icons, IconRenderer};
pub use source::{RenderedIcon, SourceImage};
