//! ANSI styling of printer output.
//!
//! Styling wraps text in escape sequences and never changes its visible
//! width, so layout is always computed on the plain text.

use crossterm::style::Stylize;

/// What a piece of output text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Titles, step text, cell values and description lines.
    Plain,
    /// `Feature:`, `Background:`, `Scenario:`, `Scenario Outline:`, `Examples:`.
    Keyword,
    /// `Given`, `When`, `Then`, `And`, `But`, `Or`.
    StepKeyword,
    /// A line of `@tag`s.
    Tag,
    /// Table `|` delimiters.
    Border,
    /// Doc string `"""` fences.
    Fence,
    /// `#` comments.
    Comment,
}

/// Render `text` for `role`, with ANSI styling when `color` is set.
///
/// # Examples
///
/// ```
/// use gherkish_fmt::style::{Role, paint};
///
/// assert_eq!(paint("Given", Role::StepKeyword, false), "Given");
/// assert!(paint("Given", Role::StepKeyword, true).contains('\u{1b}'));
/// ```
#[must_use]
pub fn paint(text: &str, role: Role, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    match role {
        Role::Plain => text.to_string(),
        Role::Keyword => text.bold().blue().to_string(),
        Role::StepKeyword => text.bold().green().to_string(),
        Role::Tag => text.cyan().to_string(),
        Role::Border => text.dark_grey().to_string(),
        Role::Fence => text.yellow().to_string(),
        Role::Comment => text.dark_grey().italic().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Keyword)]
    #[case(Role::StepKeyword)]
    #[case(Role::Comment)]
    fn styled_text_keeps_its_content(#[case] role: Role) {
        let styled = paint("Scenario:", role, true);
        assert!(styled.contains("Scenario:"));
        assert!(styled.starts_with('\u{1b}'));
    }

    #[test]
    fn plain_role_is_never_styled() {
        assert_eq!(paint("text", Role::Plain, true), "text");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(paint("", Role::Tag, true), "");
    }
}
