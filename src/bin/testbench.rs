use clap::Parser;
use std::time;

use mprj_fir::anyhow::{Context, Result};
use mprj_fir::image;
use mprj_fir::image::BoundaryKind;
use mprj_fir::runtime;
use mprj_fir::runtime::config;
use mprj_fir::testbench;
use mprj_fir::testbench::RecordingMailbox;
use mprj_fir::testbench::Testbench;
use mprj_fir::tracing::info;

#[derive(Parser, Debug)]
#[clap(about = "Run the FIR firmware image and check its reported outputs")]
struct Args {
    /// Kernel invocations [default: from config]
    #[clap(short = 'n', long)]
    iterations: Option<usize>,
    /// What lies before the history buffer: zero | taps [default: from config]
    #[clap(short, long)]
    boundary: Option<BoundaryKind>,
    /// Comma-separated input signal [default: reference signal]
    #[clap(short, long, allow_hyphen_values = true)]
    signal: Option<String>,
    /// Skip output verification
    #[clap(long)]
    no_verify: bool,
}

fn main() -> Result<()> {
    let Args {
        iterations,
        boundary,
        signal,
        no_verify,
    } = Args::parse();

    runtime::init();
    let config = config::config();

    let boundary = boundary.unwrap_or(config.boundary);
    let iterations = iterations.unwrap_or(config.iterations);
    let signal = match signal {
        Some(s) => image::parse_signal(&s).context("invalid --signal")?,
        None => image::SIGNAL,
    };
    image::set_boundary(boundary);

    let mut tb = Testbench::new(RecordingMailbox::default()).iterations(iterations);
    let now = time::Instant::now();
    let output = tb.run(&signal);
    let elapsed = now.elapsed();
    info!("{iterations} runs took {elapsed:?}");

    println!("taps:   {:?}", image::TAPS);
    println!("signal: {signal:?}");
    println!("output: {output:?}");

    if config.verify && !no_verify && iterations > 0 {
        let expected = image::expected(&signal, boundary);
        let frames = testbench::verify(tb.mailbox().words(), &expected)
            .context("testbench verification failed")?;
        info!("verified {frames} frames");
        println!("PASS ({frames} frames)");
    }

    Ok(())
}
