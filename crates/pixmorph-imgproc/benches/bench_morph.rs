use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixmorph_image::Image;
use pixmorph_imgproc::{blend, morph};

fn bench_morph(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morph");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let source = Image::<u8, 3>::from_size_val(image_size, 10).unwrap();
        let target = Image::<u8, 3>::from_size_val(image_size, 200).unwrap();
        let small_size = [width / 4, height / 4].into();
        let small_target = Image::<u8, 3>::from_size_val(small_size, 200).unwrap();

        group.bench_with_input(
            BenchmarkId::new("blend", &parameter_string),
            &(&source, &target),
            |b, i| b.iter(|| blend::blend(black_box(i.0), black_box(i.1), 0.5)),
        );

        group.bench_with_input(
            BenchmarkId::new("morph_10", &parameter_string),
            &(&source, &target),
            |b, i| b.iter(|| morph::morph(black_box(i.0), black_box(i.1), 10)),
        );

        group.bench_with_input(
            BenchmarkId::new("morph_10_resized_target", &parameter_string),
            &(&source, &small_target),
            |b, i| b.iter(|| morph::morph(black_box(i.0), black_box(i.1), 10)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_morph);
criterion_main!(benches);
