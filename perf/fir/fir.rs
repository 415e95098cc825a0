use clap::Parser;
use std::hint::black_box;
use std::time;

use mprj_fir::anyhow::{Result, bail};
use mprj_fir::firdsp::FirKernel;
use mprj_fir::image;
use mprj_fir::image::BoundaryKind;
use mprj_fir::image::N;

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, default_value_t = 0)]
    run: usize,
    #[clap(short = 'n', long, default_value_t = 1_000_000)]
    invocations: usize,
    #[clap(short, long, default_value_t = BoundaryKind::Zero)]
    boundary: BoundaryKind,
    /// Run through the locked image kernel instead of a local one
    #[clap(short, long)]
    locked: bool,
}

fn main() -> Result<()> {
    let Args {
        run,
        invocations,
        boundary,
        locked,
    } = Args::parse();

    let signals: Vec<[i32; N]> = (0..64)
        .map(|_| std::array::from_fn(|_| rand::random_range(-1024..1024)))
        .collect();

    let mut checksum = 0i32;
    let now = time::Instant::now();
    if locked {
        image::set_boundary(boundary);
        for i in 0..invocations {
            let out = image::run(black_box(&signals[i % signals.len()]));
            checksum = checksum.wrapping_add(out[N - 1]);
        }
    } else {
        let mut fir = FirKernel::with_boundary(image::TAPS, boundary.boundary());
        for i in 0..invocations {
            fir.load_signal(black_box(&signals[i % signals.len()]));
            checksum = checksum.wrapping_add(fir.compute()[N - 1]);
        }
    }
    let elapsed = now.elapsed();

    // the last output has a full window, so it does not depend on the boundary
    let last: Vec<i32> = signals
        .iter()
        .map(|s| image::expected(s, BoundaryKind::Zero)[N - 1])
        .collect();
    let want = (0..invocations).fold(0i32, |acc, i| acc.wrapping_add(last[i % last.len()]));
    if checksum != want {
        bail!("checksum mismatch: got {checksum}, expected {want}");
    }

    println!(
        "{},{},{},{},{}",
        run,
        invocations,
        boundary,
        locked,
        elapsed.as_secs_f64()
    );

    Ok(())
}
