// `render_icons` writes into the current working directory, so it runs in its
// own test binary with a single test.
use std::time::{SystemTime, UNIX_EPOCH};

use icon_renderer::icons::{render_icons, IconError};
use image::{ImageBuffer, ImageFormat, Rgba};

#[test]
fn render_icons_writes_into_working_directory() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("icon-renderer-cwd-{nanos}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");

    ImageBuffer::from_pixel(512, 512, Rgba([255u8, 0, 0, 255]))
        .save_with_format(dir.join("ai_brain_base.png"), ImageFormat::Png)
        .expect("write source");

    let previous = std::env::current_dir().expect("current dir");
    std::env::set_current_dir(&dir).expect("enter temp dir");

    let missing = render_icons("does-not-exist.png", &[16]);
    let missing_large = render_icons("does-not-exist.png", &[5000]);
    let rendered = render_icons("ai_brain_base.png", &[16, 32, 80, 128]);

    std::env::set_current_dir(previous).expect("restore cwd");

    assert!(matches!(missing, Err(IconError::SourceLoad { .. })));
    assert!(matches!(missing_large, Err(IconError::SourceLoad { .. })));

    let rendered = rendered.expect("render should succeed");
    let lines: Vec<String> = rendered
        .iter()
        .map(|icon| format!("Saved {}", icon.file_name))
        .collect();
    assert_eq!(
        lines,
        vec![
            "Saved icon-16.png",
            "Saved icon-32.png",
            "Saved icon-80.png",
            "Saved icon-128.png",
        ]
    );

    for size in [16u32, 32, 80, 128] {
        let icon = image::open(dir.join(format!("icon-{size}.png")))
            .expect("decode icon")
            .to_rgba8();
        assert_eq!(icon.dimensions(), (size, size));
        assert!(icon.pixels().all(|p| p.0[0] >= 254 && p.0[3] == 255));
    }

    let _ = std::fs::remove_dir_all(dir);
}
