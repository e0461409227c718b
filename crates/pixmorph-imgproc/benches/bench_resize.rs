use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixmorph_image::{Image, ImageSize};
use pixmorph_imgproc::resize;

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        let half = ImageSize {
            width: width / 2,
            height: height / 2,
        };
        let double = ImageSize {
            width: width * 2,
            height: height * 2,
        };

        group.bench_with_input(
            BenchmarkId::new("nearest_down", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize_nearest(black_box(i), half)),
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_up", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize_nearest(black_box(i), double)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
