//! Parsing of the page-range field ("1", "3-7").

use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

const SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("malformed page range {0:?}")]
    Malformed(String),
    #[error("page {page} is outside the document ({page_count} pages)")]
    OutOfBounds { page: i64, page_count: usize },
    #[error("range {first}-{last} ends before it starts")]
    Reversed { first: i64, last: i64 },
}

/// A 1-based inclusive page range as typed by the user.
///
/// Parsing only checks the syntax; bounds are checked by [`PageRange::resolve`]
/// once the page count of the opened document is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: i64,
    pub last: i64,
}

impl PageRange {
    pub fn single(page: i64) -> Self {
        Self {
            first: page,
            last: page,
        }
    }

    /// Zero-based page indices to extract, ascending.
    pub fn resolve(&self, page_count: usize) -> Result<RangeInclusive<usize>, PageRangeError> {
        if self.first > self.last {
            return Err(PageRangeError::Reversed {
                first: self.first,
                last: self.last,
            });
        }
        let first = to_index(self.first, page_count)?;
        let last = to_index(self.last, page_count)?;
        Ok(first..=last)
    }
}

fn to_index(page: i64, page_count: usize) -> Result<usize, PageRangeError> {
    let out_of_bounds = || PageRangeError::OutOfBounds { page, page_count };
    let index = page
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(out_of_bounds)?;
    if index < page_count {
        Ok(index)
    } else {
        Err(out_of_bounds())
    }
}

fn parse_page(token: &str, input: &str) -> Result<i64, PageRangeError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| PageRangeError::Malformed(input.to_string()))
}

impl FromStr for PageRange {
    type Err = PageRangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if !trimmed.contains(SEPARATOR) {
            return parse_page(trimmed, input).map(PageRange::single);
        }

        let tokens: Vec<&str> = trimmed.split(SEPARATOR).collect();
        match tokens.as_slice() {
            [first, last] => Ok(PageRange {
                first: parse_page(first, input)?,
                last: parse_page(last, input)?,
            }),
            _ => Err(PageRangeError::Malformed(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str, page_count: usize) -> Result<RangeInclusive<usize>, PageRangeError> {
        input.parse::<PageRange>()?.resolve(page_count)
    }

    #[test]
    fn single_page_is_zero_based() {
        assert_eq!(resolve("1", 10), Ok(0..=0));
        assert_eq!(resolve("10", 10), Ok(9..=9));
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(resolve("3-7", 10), Ok(2..=6));
        assert_eq!(resolve("4-4", 10), Ok(3..=3));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(resolve("  2 ", 5), Ok(1..=1));
        assert_eq!(resolve(" 2 - 3 ", 5), Ok(1..=2));
    }

    #[test]
    fn page_zero_is_out_of_bounds() {
        assert_eq!(
            resolve("0", 10),
            Err(PageRangeError::OutOfBounds { page: 0, page_count: 10 })
        );
    }

    #[test]
    fn page_past_end_is_out_of_bounds() {
        assert!(matches!(
            resolve("15", 10),
            Err(PageRangeError::OutOfBounds { page: 15, .. })
        ));
        assert!(matches!(
            resolve("8-11", 10),
            Err(PageRangeError::OutOfBounds { page: 11, .. })
        ));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            resolve("7-3", 10),
            Err(PageRangeError::Reversed { first: 7, last: 3 })
        );
    }

    #[test]
    fn malformed_inputs() {
        for input in ["abc", "", "1-2-3", "-3", "3-", "1.5", "one-two"] {
            assert!(
                matches!(input.parse::<PageRange>(), Err(PageRangeError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn empty_document_has_no_valid_page() {
        assert!(resolve("1", 0).is_err());
    }
}
