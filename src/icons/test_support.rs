//! 单元测试共用的临时目录与合成图片工具。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageBuffer, ImageFormat, Rgb, Rgba};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn unique_temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "icon-renderer-test-{}-{nanos}-{seq}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub(crate) fn write_rgba_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) -> PathBuf {
    let path = dir.join(name);
    ImageBuffer::from_pixel(width, height, color)
        .save_with_format(&path, ImageFormat::Png)
        .expect("write rgba test image");
    path
}

pub(crate) fn write_rgb_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: [u8; 3],
) -> PathBuf {
    let path = dir.join(name);
    ImageBuffer::from_pixel(width, height, Rgb(color))
        .save_with_format(&path, ImageFormat::Png)
        .expect("write rgb test image");
    path
}
