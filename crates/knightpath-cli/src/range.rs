//! 盤面寸法の範囲指定
//!
//! `N`、`A..B`（B を含まない）、`A..=B` の3形式を受け付ける。

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid number in range: {0:?}")]
    InvalidNumber(String),

    #[error("dimensions must be positive: {0:?}")]
    Zero(String),

    #[error("range is empty: {0:?}")]
    Empty(String),
}

/// 寸法の閉区間（1以上）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimRange {
    start: usize,
    end: usize,
}

impl DimRange {
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl FromStr for DimRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| RangeError::InvalidNumber(s.to_string()))
        };

        let (start, end) = if let Some((a, b)) = text.split_once("..=") {
            (parse(a)?, parse(b)?)
        } else if let Some((a, b)) = text.split_once("..") {
            let (a, b) = (parse(a)?, parse(b)?);
            if b <= a {
                return Err(RangeError::Empty(s.to_string()));
            }
            (a, b - 1)
        } else {
            let n = parse(text)?;
            (n, n)
        };

        if start == 0 {
            return Err(RangeError::Zero(s.to_string()));
        }
        if end < start {
            return Err(RangeError::Empty(s.to_string()));
        }
        Ok(DimRange { start, end })
    }
}

impl fmt::Display for DimRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..={}", self.start, self.end)
        }
    }
}
