//! Reader for the line-oriented input format: a header `<data size> <query size>` followed by
//! that many data values and then query values, one integer per line.
use crate::{Error, Result};
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub data: Vec<i32>,
    pub queries: Vec<i32>,
}

pub fn read_input_file(path: &Path) -> Result<Dataset> {
    let f = File::open(path).map_err(|source| Error::InputUnavailable {
        path: path.to_owned(),
        source,
    })?;
    parse_input(BufReader::new(f))
}

pub fn parse_input(reader: impl BufRead) -> Result<Dataset> {
    let mut lines = NumberedLines {
        lines: reader.lines(),
        line: 0,
    };

    let header = lines.next()?.ok_or(Error::MissingHeader)?;
    let (data_len, query_len) = parse_header(&header).ok_or(Error::MalformedHeader { line: 1 })?;
    debug!("Header: {data_len} data values, {query_len} queries");

    let data = lines.values(data_len)?;
    let queries = lines.values(query_len)?;
    Ok(Dataset { data, queries })
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut it = line.split_whitespace();
    let data_len = it.next()?.parse().ok()?;
    let query_len = it.next()?.parse().ok()?;
    Some((data_len, query_len))
}

struct NumberedLines<B> {
    lines: Lines<B>,
    /// 1-based number of the last line returned.
    line: usize,
}

impl<B: BufRead> NumberedLines<B> {
    fn next(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(l) => {
                self.line += 1;
                Ok(Some(l?))
            }
            None => Ok(None),
        }
    }

    fn values(&mut self, n: usize) -> Result<Vec<i32>> {
        // The header is untrusted, so don't reserve more than a sane amount up front.
        let mut vals = Vec::with_capacity(n.min(1 << 20));
        for _ in 0..n {
            let Some(l) = self.next()? else {
                return Err(Error::MissingValue {
                    line: self.line + 1,
                });
            };
            let value = l.trim();
            let x = value.parse().map_err(|source| Error::InvalidValue {
                line: self.line,
                value: value.to_string(),
                source,
            })?;
            vals.push(x);
        }
        Ok(vals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_example() {
        let d = parse_input("3 2\n5\n1\n9\n1\n9\n".as_bytes()).unwrap();
        assert_eq!(d.data, vec![5, 1, 9]);
        assert_eq!(d.queries, vec![1, 9]);
    }

    #[test]
    fn crlf_and_negative_values() {
        let d = parse_input("2 1\r\n-4\r\n2147483647\r\n-2147483648\r\n".as_bytes()).unwrap();
        assert_eq!(d.data, vec![-4, i32::MAX]);
        assert_eq!(d.queries, vec![i32::MIN]);
    }

    #[test]
    fn empty_sections() {
        let d = parse_input("0 0\n".as_bytes()).unwrap();
        assert_eq!(d, Dataset::default());
    }

    #[test]
    fn trailing_lines_are_ignored() {
        let d = parse_input("1 1\n3\n4\n99\nrubbish\n".as_bytes()).unwrap();
        assert_eq!(d.data, vec![3]);
        assert_eq!(d.queries, vec![4]);
    }

    #[test]
    fn missing_header() {
        assert!(matches!(parse_input("".as_bytes()), Err(Error::MissingHeader)));
    }

    #[test]
    fn malformed_header() {
        for input in ["3\n1\n2\n3\n", "a b\n", "3 -1\n", "\n"] {
            assert!(
                matches!(
                    parse_input(input.as_bytes()),
                    Err(Error::MalformedHeader { line: 1 })
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn missing_values() {
        let err = parse_input("2 2\n1\n2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingValue { line: 5 }), "{err}");
    }

    #[test]
    fn invalid_value() {
        let err = parse_input("2 0\n1\nx7\n".as_bytes()).unwrap_err();
        match err {
            Error::InvalidValue { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "x7");
            }
            e => panic!("unexpected error {e}"),
        }
        // Out of range for i32.
        let err = parse_input("1 0\n2147483648\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn missing_file() {
        let err = read_input_file(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, Error::InputUnavailable { .. }));
    }
}
