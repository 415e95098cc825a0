use criterion::{Criterion, black_box, criterion_group, criterion_main};
use firdsp::prelude::*;
use rand::Rng;

trait Generatable {
    fn generate() -> Self;
}

impl Generatable for i16 {
    fn generate() -> Self {
        rand::rng().random()
    }
}

impl Generatable for i32 {
    fn generate() -> Self {
        rand::rng().random_range(-1024..1024)
    }
}

fn bench_kernel<T, const N: usize>(b: &mut criterion::Bencher)
where
    T: Sample + Generatable,
{
    let taps: [T; N] = core::array::from_fn(|_| T::generate());
    let signal: [T; N] = core::array::from_fn(|_| T::generate());
    let mut fir = FirKernel::new(black_box(taps));
    fir.load_signal(&signal);
    b.iter(|| {
        black_box(fir.compute());
    });
}

fn bench_filter<T>(b: &mut criterion::Bencher, ntaps: usize, nsamps: usize)
where
    T: Sample + Generatable,
{
    let taps: Vec<_> = (0..ntaps).map(|_| T::generate()).collect();
    let input: Vec<_> = (0..nsamps).map(|_| T::generate()).collect();
    let mut output = vec![T::zero(); nsamps];
    let fir = FirFilter::<T, _>::new(black_box(taps));
    b.iter(|| {
        fir.filter(black_box(&input), black_box(&mut output));
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    group.throughput(criterion::Throughput::Elements(11));
    group.bench_function("kernel-11tap i32", |b| {
        bench_kernel::<i32, 11>(b);
    });
    group.bench_function("kernel-11tap i16", |b| {
        bench_kernel::<i16, 11>(b);
    });

    group.throughput(criterion::Throughput::Elements(64));
    group.bench_function("kernel-64tap i32", |b| {
        bench_kernel::<i32, 64>(b);
    });

    group.finish();

    let nsamps = 1000usize;
    let mut group = c.benchmark_group("filter");
    group.throughput(criterion::Throughput::Elements(nsamps as u64));

    for ntaps in [3, 11, 64] {
        group.bench_function(format!("fir-{ntaps}tap i32 {nsamps}"), |b| {
            bench_filter::<i32>(b, ntaps, nsamps);
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
