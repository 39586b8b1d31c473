use std::io::BufRead;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::errors::ParseError;
use crate::utils::get_dynamic_reader;

///
/// Series struct, the representation of a function file: one real value per
/// line, where the 0-based line index is the genomic position of the value.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub values: Vec<f64>,
    pub path: Option<PathBuf>,
}

impl Series {
    ///
    /// Parse a value listing from any buffered reader.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut values = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            // nan and inf parse as f64 but are not measurements
            let value = line
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidValue {
                    line: idx + 1,
                    content: line.clone(),
                })?;
            values.push(value);
        }

        Ok(Series { values, path: None })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<&Path> for Series {
    type Error = ParseError;

    ///
    /// Create a new [Series] from a function file.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, optionally gzipped.
    fn try_from(value: &Path) -> Result<Self, ParseError> {
        let reader = get_dynamic_reader(value)?;
        let mut series = Series::from_reader(reader)?;
        series.path = Some(value.to_owned());

        debug!("Read {} values from {}", series.len(), value.display());

        Ok(series)
    }
}

impl TryFrom<&str> for Series {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, ParseError> {
        Series::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for Series {
    type Error = ParseError;

    fn try_from(value: PathBuf) -> Result<Self, ParseError> {
        Series::try_from(value.as_path())
    }
}

impl FromStr for Series {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Series::from_reader(s.as_bytes())
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Series { values, path: None }
    }
}

impl Deref for Series {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/geno")
            .join(file_name)
    }

    #[rstest]
    fn test_open_from_path() {
        let series = Series::try_from(get_test_path("y.f")).unwrap();
        assert_eq!(
            series.values,
            vec![10.5, 11.5, 12.0, 13.0, 13.5, 15.0, 14.0]
        );
        assert_eq!(series.len(), 7);
    }

    #[rstest]
    fn test_open_gz_matches_plain() {
        let tempdir = tempfile::tempdir().unwrap();
        let gz_path = tempdir.path().join("y.f.gz");

        let file = File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(&std::fs::read(get_test_path("y.f")).unwrap())
            .unwrap();
        encoder.finish().unwrap();

        let plain = Series::try_from(get_test_path("y.f")).unwrap();
        let gz = Series::try_from(gz_path.as_path()).unwrap();
        assert_eq!(gz.values, plain.values);
        assert_eq!(gz.path, Some(gz_path));
    }

    #[rstest]
    fn test_surrounding_whitespace() {
        let series: Series = "  1.5 \n\t-2\n3e2\n".parse().unwrap();
        assert_eq!(series.values, vec![1.5, -2.0, 300.0]);
    }

    #[rstest]
    #[case("1\nabc\n", 2)]
    #[case("1\n\n2\n", 2)]
    #[case("1 2\n", 1)]
    #[case("1\nNaN\n", 2)]
    #[case("nan\n", 1)]
    #[case("1\n2\ninf\n", 3)]
    #[case("-Infinity\n", 1)]
    fn test_invalid_value(#[case] content: &str, #[case] bad_line: usize) {
        match content.parse::<Series>() {
            Err(ParseError::InvalidValue { line, .. }) => assert_eq!(line, bad_line),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[rstest]
    fn test_deref_to_slice() {
        let series = Series::from(vec![1.0, 2.0]);
        let slice: &[f64] = &series;
        assert_eq!(slice, &[1.0, 2.0]);
    }
}
