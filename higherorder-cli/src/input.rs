use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::error::ParseError;
use crate::functions::parse_integer;

/// Reads whitespace-separated integers from `infile`, or stdin without one.
pub(crate) fn read_values(infile: Option<&Path>) -> anyhow::Result<Vec<i64>> {
    let mut reader: Box<dyn BufRead> = if let Some(infile) = infile {
        Box::new(BufReader::new(File::open(infile)?))
    } else {
        Box::new(BufReader::new(std::io::stdin()))
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_values(&text)?)
}

pub(crate) fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace().map(parse_integer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_across_lines() {
        assert_eq!(parse_values("1 2\n-3\t4\n"), Ok(vec![1, 2, -3, 4]));
    }

    #[test]
    fn test_parse_values_empty() {
        assert_eq!(parse_values("  \n"), Ok(vec![]));
    }

    #[test]
    fn test_parse_values_names_bad_token() {
        assert_eq!(
            parse_values("1 two 3"),
            Err(ParseError::InvalidInteger("two".to_string()))
        );
    }
}
