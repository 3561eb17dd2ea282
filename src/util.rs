use crate::{Error, Result};
use log::info;
use rand::Rng;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const DEFAULT_DATA_LEN: usize = 1_000_000;
pub const DEFAULT_QUERY_LEN: usize = 10;
pub const DEFAULT_MAX_VALUE: i32 = 1_000_000;
pub const DEFAULT_GENERATED_FILE: &str = "genInputFile.txt";

/// Generate `n` values uniformly in `0..max`.
pub fn gen_vals(n: usize, max: i32, rng: &mut impl Rng) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}

/// Write a random benchmark input: header, `data_len` values, then `query_len` queries.
pub fn generate_input(
    w: &mut impl Write,
    data_len: usize,
    query_len: usize,
    max: i32,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    writeln!(w, "{data_len} {query_len}")?;
    for n in [data_len, query_len] {
        for x in gen_vals(n, max, rng) {
            writeln!(w, "{x}")?;
        }
    }
    w.flush()
}

pub fn generate_input_file(
    path: &Path,
    data_len: usize,
    query_len: usize,
    max: i32,
    rng: &mut impl Rng,
) -> Result<()> {
    info!("Generating text file with {data_len} elements...");
    let f = File::create(path).map_err(|source| Error::SinkUnavailable {
        path: path.to_owned(),
        source,
    })?;
    generate_input(&mut BufWriter::new(f), data_len, query_len, max, rng)?;
    info!("Wrote {path:?}");
    Ok(())
}

pub fn init_trace(verbose: u8) {
    // Warnings and errors by default, `-v` for progress, `-vv` for details.
    let res = stderrlog::new()
        .verbosity(1 + verbose as usize)
        .show_level(true)
        .init();
    if let Err(e) = res {
        eprintln!("Logger already initialised: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_input;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_file_parses() {
        let rng = &mut ChaCha8Rng::seed_from_u64(31415);
        let mut buf = vec![];
        generate_input(&mut buf, 1000, 10, 100, rng).unwrap();
        let d = parse_input(buf.as_slice()).unwrap();
        assert_eq!(d.data.len(), 1000);
        assert_eq!(d.queries.len(), 10);
        assert!(d.data.iter().chain(&d.queries).all(|&x| (0..100).contains(&x)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = gen_vals(50, DEFAULT_MAX_VALUE, &mut ChaCha8Rng::seed_from_u64(1));
        let b = gen_vals(50, DEFAULT_MAX_VALUE, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
