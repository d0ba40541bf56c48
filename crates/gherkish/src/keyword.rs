//! Step and block keywords recognised at the start of a Gherkin line.
//!
//! Keyword matching is case-sensitive in feature text. The recogniser does
//! not use [`FromStr`]; that implementation on [`StepKeyword`] is for
//! callers building a DOM by hand, and ignores case and surrounding
//! whitespace.
//!
//! ```
//! use gherkish::{Step, StepKeyword};
//!
//! let keyword: StepKeyword = " given ".parse()?;
//! let step = Step::new(keyword, "a cart");
//! assert_eq!(step.keyword(), StepKeyword::Given);
//! assert!("Gvien".parse::<StepKeyword>().is_err());
//! # Ok::<(), gherkish::StepKeywordParseError>(())
//! ```

use std::fmt;
use std::str::FromStr;

/// Keyword introducing a step line.
///
/// `Or` is reserved: the DOM and the printer understand it, but the
/// recogniser never produces it from feature text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
    /// Alternative conditions; reserved for future grammar extensions.
    Or,
}

/// Keywords accepted by the recogniser, longest literal first.
const RECOGNISED_STEP_KEYWORDS: [StepKeyword; 5] = [
    StepKeyword::Given,
    StepKeyword::When,
    StepKeyword::Then,
    StepKeyword::And,
    StepKeyword::But,
];

impl StepKeyword {
    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Or => "Or",
        }
    }

    /// Whether the keyword is reserved and rejected in feature text.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Or)
    }

    /// Match a step keyword at the start of `line`.
    ///
    /// The keyword must be followed by a space, a tab or the end of the line,
    /// so `Andrew` is not mistaken for `And`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::recognise("Then done"), Some(StepKeyword::Then));
    /// assert_eq!(StepKeyword::recognise("Andrew"), None);
    /// assert_eq!(StepKeyword::recognise("Or maybe"), None);
    /// ```
    #[must_use]
    pub fn recognise(line: &str) -> Option<Self> {
        RECOGNISED_STEP_KEYWORDS.into_iter().find(|keyword| {
            line.strip_prefix(keyword.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
        })
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
///
/// Contains the unrecognised keyword text for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [
            Self::Given,
            Self::When,
            Self::Then,
            Self::And,
            Self::But,
            Self::Or,
        ]
        .into_iter()
        .find(|keyword| trimmed.eq_ignore_ascii_case(keyword.as_str()))
        .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

impl TryFrom<&str> for StepKeyword {
    type Error = StepKeywordParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keyword introducing a Feature, a block, or an Examples section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BlockKeyword {
    /// `Feature:`
    Feature,
    /// `Background:`
    Background,
    /// `Scenario:`
    Scenario,
    /// `Scenario Outline:`
    Outline,
    /// `Examples:`
    Examples,
}

impl BlockKeyword {
    /// Return the keyword, including its trailing colon.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "Feature:",
            Self::Background => "Background:",
            Self::Scenario => "Scenario:",
            Self::Outline => "Scenario Outline:",
            Self::Examples => "Examples:",
        }
    }

    /// Match a block keyword at the start of `line`.
    ///
    /// `Scenario Outline:` is tried before `Scenario:`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkish::BlockKeyword;
    ///
    /// assert_eq!(
    ///     BlockKeyword::recognise("Scenario Outline: sums"),
    ///     Some(BlockKeyword::Outline)
    /// );
    /// assert_eq!(BlockKeyword::recognise("Scenario"), None);
    /// ```
    #[must_use]
    pub fn recognise(line: &str) -> Option<Self> {
        [
            Self::Outline,
            Self::Background,
            Self::Scenario,
            Self::Examples,
            Self::Feature,
        ]
        .into_iter()
        .find(|keyword| line.starts_with(keyword.as_str()))
    }
}

impl fmt::Display for BlockKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
