//! Serialization of benchmark results.
use crate::{
    driver::{QueryRecord, RunReport},
    Error, Result,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
    time::Duration,
};

/// Consumer of the per-run result stream.
pub trait ResultSink {
    fn prep_time(&mut self, elapsed: Duration) -> io::Result<()>;
    fn record(&mut self, record: &QueryRecord) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Line-oriented text output, one line per query.
pub struct TextSink<W: Write> {
    w: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(w: W) -> Self {
        TextSink { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl TextSink<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let f = File::create(path).map_err(|source| Error::SinkUnavailable {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn prep_time(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.w, "Prep time: {}ms ", elapsed.as_millis())
    }

    fn record(&mut self, record: &QueryRecord) -> io::Result<()> {
        match record {
            QueryRecord::Array {
                query,
                sequential,
                binary,
            } => writeln!(
                self.w,
                "{}:{}ms {}:{}ms {}",
                sequential.found,
                sequential.elapsed.as_millis(),
                binary.found,
                binary.elapsed.as_millis(),
                query
            ),
            QueryRecord::Tree { tree, .. } => {
                writeln!(self.w, "{}:{}ms ", tree.found, tree.elapsed.as_millis())
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}

pub fn save_json(report: &RunReport, path: &Path) -> Result<()> {
    let f = File::create(path).map_err(|source| Error::SinkUnavailable {
        path: path.to_owned(),
        source,
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(io::Error::from)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Timing;

    fn timing(found: bool, ms: u64) -> Timing {
        Timing {
            found,
            elapsed: Duration::from_millis(ms),
        }
    }

    fn render(f: impl FnOnce(&mut TextSink<Vec<u8>>) -> io::Result<()>) -> String {
        let mut sink = TextSink::new(vec![]);
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn prep_line() {
        let s = render(|s| s.prep_time(Duration::from_micros(12_999)));
        assert_eq!(s, "Prep time: 12ms \n");
    }

    #[test]
    fn array_line() {
        let r = QueryRecord::Array {
            query: -17,
            sequential: timing(true, 3),
            binary: timing(false, 0),
        };
        assert_eq!(render(|s| s.record(&r)), "true:3ms false:0ms -17\n");
    }

    #[test]
    fn tree_line() {
        let r = QueryRecord::Tree {
            query: 4,
            tree: timing(false, 1),
        };
        assert_eq!(render(|s| s.record(&r)), "false:1ms \n");
    }

    #[test]
    fn unwritable_path() {
        let err = TextSink::create(Path::new("/nonexistent/dir/output.txt")).err();
        assert!(matches!(err, Some(Error::SinkUnavailable { .. })));
    }
}
