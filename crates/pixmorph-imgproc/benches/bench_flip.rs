use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixmorph_image::Image;
use pixmorph_imgproc::{color, flip};

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flip");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        group.bench_with_input(
            BenchmarkId::new("horizontal", &parameter_string),
            &image,
            |b, i| b.iter(|| flip::horizontal_flip(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("vertical", &parameter_string),
            &image,
            |b, i| b.iter(|| flip::vertical_flip(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("grayscale", &parameter_string),
            &image,
            |b, i| b.iter(|| color::grayscale(black_box(i))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_flip);
criterion_main!(benches);
