//! Indentation rules.
//!
//! An [`IndentRule`] computes how far the line *after* a construct should be
//! indented, relative to the construct's base indentation. The result is a
//! column delta in the same units as the configured indent unit, so a rule can
//! also dedent (block comments align their `*` continuation lines one column
//! left of the statement level).
//!
//! The `except` patterns match against the text already typed on the line
//! being indented. This is a deliberate reproduction of the string-pattern
//! heuristic used by the host editor tradition: it can misfire on pathological
//! input (an identifier starting with `else`, say) and is not a structural
//! lookahead.

use regex::Regex;

/// A context-sensitive indent function: `(text_after, unit) -> column delta`.
pub type CustomIndentFn = fn(text_after: &str, unit: i32) -> i32;

/// How the line following a construct is indented.
#[derive(Debug, Clone)]
pub enum IndentRule {
    /// Continuation indent: one unit deeper, unless the text after the cursor
    /// matches `except` (typically an opening brace or a continuation keyword
    /// that should align with the construct itself).
    Continued {
        /// Pattern exempting the next line from the extra unit.
        except: Option<Regex>,
    },
    /// Flat: the next line aligns with the construct (labels).
    Flat,
    /// Fixed delta in indent units; negative values dedent.
    Units(i32),
    /// Fully custom rule.
    Custom(CustomIndentFn),
}

impl IndentRule {
    /// A continuation rule with an exception pattern.
    ///
    /// Fails if `except` is not a valid regular expression.
    pub fn continued(except: &str) -> Result<Self, regex::Error> {
        Ok(Self::Continued {
            except: Some(Regex::new(except)?),
        })
    }

    /// A continuation rule with no exception.
    pub fn continued_always() -> Self {
        Self::Continued { except: None }
    }

    /// Evaluate the rule.
    ///
    /// `text_after` is the whitespace-leading text already present on the line
    /// being indented; `unit` is the indent unit in columns. The result is the
    /// column delta to add to the construct's base indentation. Pure and
    /// total: no rule ever fails.
    pub fn indent_delta(&self, text_after: &str, unit: i32) -> i32 {
        match self {
            Self::Continued { except } => {
                if except.as_ref().is_some_and(|re| re.is_match(text_after)) {
                    0
                } else {
                    unit
                }
            }
            Self::Flat => 0,
            Self::Units(n) => n * unit,
            Self::Custom(f) => f(text_after, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continued_rule_applies_exception() {
        let rule = IndentRule::continued(r"^\s*\{").unwrap();
        assert_eq!(rule.indent_delta("x = 1;", 2), 2);
        assert_eq!(rule.indent_delta("{", 2), 0);
        assert_eq!(rule.indent_delta("   {", 2), 0);
    }

    #[test]
    fn test_continued_without_exception_always_indents() {
        let rule = IndentRule::continued_always();
        assert_eq!(rule.indent_delta("{", 4), 4);
    }

    #[test]
    fn test_flat_and_fixed_rules() {
        assert_eq!(IndentRule::Flat.indent_delta("anything", 8), 0);
        assert_eq!(IndentRule::Units(-1).indent_delta("* text", 2), -2);
        assert_eq!(IndentRule::Units(2).indent_delta("x", 3), 6);
    }

    #[test]
    fn test_custom_rule_receives_inputs() {
        fn double_unless_brace(text_after: &str, unit: i32) -> i32 {
            if text_after.starts_with('}') { 0 } else { 2 * unit }
        }
        let rule = IndentRule::Custom(double_unless_brace);
        assert_eq!(rule.indent_delta("}", 2), 0);
        assert_eq!(rule.indent_delta("x", 2), 4);
    }
}
