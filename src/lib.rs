//! # 图标渲染工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   main.rs (clap CLI)                     │
//! │   参数解析 → RenderConfig → 打印 "Saved icon-<n>.png"    │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Result<Vec<RenderedIcon>, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型 + 退出码)          │
//! │  │                                                       │
//! │  └─ icons ────── IconRenderer                            │
//! │      ├─ loader     源图读取·校验·RGBA 解码                 │
//! │      ├─ pipeline   Lanczos3 等高质量降采样                 │
//! │      └─ writer     icon-<size>.png 覆盖写入                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，CLI 入口的返回类型 |
//! | [`icons`] | 从单张源图按尺寸列表生成正方形 PNG 图标 |

pub mod error;
pub mod icons;
