use criterion::{criterion_group, criterion_main, Criterion};
use edgemap::matrix::{ops, Kernel, Matrix};
use edgemap::{Filter, SobelFilter};
use std::hint::black_box;

fn make_matrix(rows: usize, cols: usize) -> Matrix {
    let mut data = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as i32);
        }
    }
    Matrix::new(data, rows, cols).expect("buffer matches dimensions")
}

fn bench_convolve(c: &mut Criterion) {
    let matrix = make_matrix(512, 512);
    let kernel = Kernel::from_3x3([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);

    c.bench_function("convolve_3x3_512", |b| {
        b.iter(|| black_box(ops::convolve(&kernel, &matrix)));
    });
}

fn bench_sobel(c: &mut Criterion) {
    let matrix = make_matrix(512, 512);
    let filter = SobelFilter::new();

    c.bench_function("sobel_512", |b| {
        b.iter(|| black_box(filter.apply(&matrix).unwrap()));
    });

    #[cfg(feature = "rayon")]
    {
        let parallel = SobelFilter::new().with_parallel(true);
        c.bench_function("sobel_512_parallel", |b| {
            b.iter(|| black_box(parallel.apply(&matrix).unwrap()));
        });
    }
}

criterion_group!(benches, bench_convolve, bench_sobel);
criterion_main!(benches);
