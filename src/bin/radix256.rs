use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use radix256::{first_unsorted, sort_keys_and_values, ActiveBuffer, QuantileSelector, DEFAULT_SAMPLE_STRIDE};

/// Radix 256 sort a random key-value vector, optionally only its top tail.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of key-value pairs
    #[arg(short = 'n', long, default_value_t = 220_480)]
    elems: usize,

    /// Approximate number of top elements to keep
    #[arg(short, long, default_value_t = 1024)]
    tail: usize,

    /// Sampling stride for the threshold estimate
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_STRIDE)]
    stride: usize,

    /// Sort everything instead of selecting the tail first
    #[arg(long, default_value_t = false)]
    full: bool,

    /// RNG seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

const DEBUG_PRINT_LEN: usize = 16;

/// Bit patterns of floats from [0, 5) order like the floats themselves.
fn fill_keys(keys: &mut [u32], rng: &mut StdRng) {
    keys.iter_mut().for_each(|key| *key = rng.gen_range(0.0_f32..5.0).to_bits());
}

fn print_keys(label: &str, keys: &[u32]) {
    if keys.len() <= DEBUG_PRINT_LEN {
        let line = keys.iter().map(|k| format!("{k:08x}")).collect::<Vec<_>>().join(" ");
        println!("{label} {line}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let selector = QuantileSelector::new(args.stride)?;
    let n = args.elems;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut input_keys = vec![0_u32; n];
    let mut input_values = (0..n as u32).collect::<Vec<u32>>();
    let mut output_keys = vec![0_u32; n];
    let mut output_values = vec![0_u32; n];

    fill_keys(&mut input_keys, &mut rng);
    print_keys("IN: ", &input_keys);

    info!(
        "sorting {n} elems, {}",
        if args.full { "full".to_string() } else { format!("tail {} with stride {}", args.tail, selector.stride()) }
    );
    let start = Instant::now();

    let (active, count) = if args.full {
        let active = sort_keys_and_values(&mut input_keys, &mut input_values, &mut output_keys, &mut output_values, n)?;
        (active, n)
    } else {
        let count = selector.select(&input_keys, &input_values, &mut output_keys, &mut output_values, n, args.tail)?;
        // the tail now lives in the output pair, sort it back through the input pair
        let active = sort_keys_and_values(&mut output_keys, &mut output_values, &mut input_keys, &mut input_values, count)
            .context("sorting the selected tail")?;
        // relabel from the swapped call above
        let active = match active {
            ActiveBuffer::Input => ActiveBuffer::Output,
            ActiveBuffer::Output => ActiveBuffer::Input,
        };
        (active, count)
    };

    let elapsed = start.elapsed();
    println!("Duration={:.6} [ms]", elapsed.as_secs_f64() * 1000.0);
    println!(
        "{} RadixSort_256 of top {} key-values of {} elems",
        if count == n { "full" } else { "partial" },
        count,
        n
    );

    let sorted = &active.pick(&input_keys, &output_keys)[..count];
    print_keys("OUT:", sorted);

    if let Some(index) = first_unsorted(sorted) {
        bail!("output is not sorted at index {index}");
    }
    println!("test vector is sorted");
    Ok(())
}
