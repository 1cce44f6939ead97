//! # 图标渲染工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与结果输出。
//! 渲染逻辑分布在 `icons` 模块中，详见 `lib.rs` 架构文档。
//!
//! ```bash
//! # 默认：读取 ai_brain_base.png，在当前目录生成 16/32/80/128 四个图标
//! icon-renderer
//!
//! # 指定源图、输出目录与尺寸
//! icon-renderer logo.png -o dist/icons -s 16,48,192,512 --parallel
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use icon_renderer::error::AppError;
use icon_renderer::icons::{
    parse_sizes, ExecutionMode, IconRenderer, RenderConfig, ResampleFilter, DEFAULT_SOURCE,
};

/// 从一张高分辨率源图生成多尺寸正方形 PNG 图标。
#[derive(Parser, Debug)]
#[command(name = "icon-renderer", version, about)]
struct Cli {
    /// 源图路径。
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// 输出目录（不存在时自动创建）。
    #[arg(long, short = 'o', default_value = ".")]
    output_dir: PathBuf,

    /// 逗号分隔的图标边长列表。
    #[arg(long, short = 's', default_value = "16,32,80,128")]
    sizes: String,

    /// 降采样滤镜：lanczos3 / catmull-rom / mitchell。
    #[arg(long, default_value = "lanczos3")]
    filter: String,

    /// 源图解码像素上限（width * height），默认与 Pillow 的解压炸弹阈值一致。
    #[arg(long, value_name = "PIXELS")]
    max_pixels: Option<u64>,

    /// 并行渲染各尺寸（输出行按完成顺序打印）。
    #[arg(long)]
    parallel: bool,

    /// 输出调试日志。
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let sizes = parse_sizes(&cli.sizes)?;
    if sizes.is_empty() {
        return Err(AppError::InvalidArgument("至少需要一个图标尺寸".to_string()));
    }

    let mut base = RenderConfig::new(cli.output_dir, sizes);
    if let Some(max_pixels) = cli.max_pixels {
        if max_pixels == 0 {
            return Err(AppError::InvalidArgument("--max-pixels 必须为正整数".to_string()));
        }
        base = base.with_max_pixels(max_pixels);
    }

    let config = RenderConfig {
        filter: ResampleFilter::from_str(&cli.filter)?,
        execution: if cli.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        },
        ..base
    };

    let renderer = IconRenderer::new(config)?;
    renderer.render_with_progress(&cli.source, |icon| {
        println!("Saved {}", icon.file_name);
    })?;

    Ok(())
}
