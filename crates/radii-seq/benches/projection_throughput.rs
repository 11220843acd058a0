use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radii_seq::{Chebyshev, Fourier, Multiplication, Sequence, SequenceSpace, Taylor, Tensor};

fn ramp<S: SequenceSpace>(space: S) -> Sequence<S, f64> {
    let coefficients = (0..space.dimension())
        .map(|k| 1.0 / (1.0 + k as f64))
        .collect();
    Sequence::new(space, coefficients).expect("kernel")
}

fn bench_projection(c: &mut Criterion) {
    let taylor = Multiplication::new(ramp(Taylor::new(32)));
    c.bench_function("project_taylor_64", |b| {
        b.iter(|| {
            let op = taylor
                .project(Taylor::new(64), Taylor::new(64))
                .expect("projection");
            black_box(op);
        });
    });

    let fourier_space = Fourier::new(32, 1.0).expect("space");
    let fourier = Multiplication::new(ramp(fourier_space));
    let target = Fourier::new(48, 1.0).expect("space");
    c.bench_function("project_fourier_48", |b| {
        b.iter(|| black_box(fourier.project(target, target).expect("projection")));
    });

    let chebyshev = Multiplication::new(ramp(Chebyshev::new(32)));
    c.bench_function("project_chebyshev_64", |b| {
        b.iter(|| {
            black_box(
                chebyshev
                    .project(Chebyshev::new(64), Chebyshev::new(64))
                    .expect("projection"),
            )
        });
    });

    let tensor_kernel = Tensor::new([Taylor::new(6).into(), Chebyshev::new(6).into()]);
    let tensor = Multiplication::new(ramp(tensor_kernel));
    let tensor_space = Tensor::new([Taylor::new(12).into(), Chebyshev::new(12).into()]);
    c.bench_function("project_tensor_12x12", |b| {
        b.iter(|| black_box(tensor.project(tensor_space, tensor_space).expect("projection")));
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
