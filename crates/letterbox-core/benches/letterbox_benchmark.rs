use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::DynamicImage;
use letterbox_core::letterbox;
use std::hint::black_box;

fn benchmark_letterbox_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Letterbox_Render");

    let sizes = vec![
        (512, 512, "512x512"),
        (1920, 1080, "1080p"),
        (3840, 2160, "4K"),
    ];

    for (width, height, label) in sizes {
        let mut img = DynamicImage::new_rgb8(width, height);
        let rgb_img = img.as_mut_rgb8().unwrap();
        for (x, y, pixel) in rgb_img.enumerate_pixels_mut() {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            *pixel = image::Rgb([r, g, 128]);
        }

        group.bench_with_input(BenchmarkId::new("render", label), &img, |b, img| {
            b.iter(|| letterbox::render(black_box(img), 500).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_letterbox_render);
criterion_main!(benches);
