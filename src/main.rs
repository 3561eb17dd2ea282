use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::{
    driver::{run_files, Mode, RunConfig},
    report::save_json,
    util::*,
    Error, Result,
};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about = "Time sequential, binary and tree search over a dataset file")]
struct Args {
    /// Input file: `<data size> <query size>`, then one integer per line.
    input: Option<PathBuf>,

    /// Output file for the per-query results.
    #[clap(default_value = "output.txt")]
    output: PathBuf,

    #[clap(long, value_enum, default_value_t = Mode::Array)]
    mode: Mode,

    /// Don't write the leading `Prep time:` line.
    #[clap(long)]
    no_prep_time: bool,

    /// Write a random input file first (to INPUT, or genInputFile.txt).
    #[clap(short, long)]
    generate: bool,
    #[clap(long, default_value_t = DEFAULT_DATA_LEN)]
    data_len: usize,
    #[clap(long, default_value_t = DEFAULT_QUERY_LEN)]
    queries: usize,
    /// Generated values lie in `0..max-value`.
    #[clap(long, default_value_t = DEFAULT_MAX_VALUE, value_parser = clap::value_parser!(i32).range(1..))]
    max_value: i32,
    #[clap(long, default_value_t = 31415)]
    seed: u64,

    /// Also write all records as JSON.
    #[clap(long)]
    json: Option<PathBuf>,

    #[clap(short, default_value_t = 0, action = clap::ArgAction::Count,)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_trace(args.verbose);

    if let Err(e) = run_args(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run_args(args: Args) -> Result<()> {
    let input = if args.generate {
        let path = args
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GENERATED_FILE));
        let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);
        generate_input_file(&path, args.data_len, args.queries, args.max_value, rng)?;
        path
    } else {
        args.input.clone().ok_or(Error::NoInput)?
    };

    let config = RunConfig {
        mode: args.mode,
        time_prep: !args.no_prep_time,
    };
    let report = run_files(&input, &args.output, config)?;

    if let Some(json) = &args.json {
        save_json(&report, json)?;
        info!("Wrote report to {json:?}");
    }
    Ok(())
}
