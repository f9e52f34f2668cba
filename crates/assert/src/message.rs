//! Custom failure messages

use std::fmt::{self, Write};

use crate::error::ContractViolation;

/// Optional override of a check's standard failure message.
///
/// The check macros build [`Message::Formatted`] from their trailing
/// arguments, so the template is checked at compile time.
/// [`Message::Template`] is the runtime form: each `{}` is replaced by the
/// `Debug` rendering of the next argument, `{{` and `}}` escape braces.
#[derive(Debug, Clone, Copy, Default)]
pub enum Message<'a> {
    /// Use the check's own description of the failure.
    #[default]
    Standard,
    Formatted(fmt::Arguments<'a>),
    Template {
        template: &'a str,
        args: &'a [&'a dyn fmt::Debug],
    },
}

impl<'a> Message<'a> {
    pub fn template(template: &'a str, args: &'a [&'a dyn fmt::Debug]) -> Self {
        Message::Template { template, args }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Message::Standard)
    }

    /// Render the override, if there is one.
    ///
    /// Returns `Ok(None)` for [`Message::Standard`].
    pub fn render(&self) -> Result<Option<String>, ContractViolation> {
        match self {
            Message::Standard => Ok(None),
            Message::Formatted(args) => Ok(Some(args.to_string())),
            Message::Template { template, args } => render_template(template, args).map(Some),
        }
    }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Message::Formatted(args)
    }
}

pub(crate) fn render_template(template: &str, args: &[&dyn fmt::Debug]) -> Result<String, ContractViolation> {
    let mut out = String::with_capacity(template.len());
    let mut used = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => match chars.peek() {
                Some((_, '{')) => {
                    chars.next();
                    out.push('{');
                }
                Some((_, '}')) => {
                    chars.next();
                    let arg = args.get(used).ok_or(ContractViolation::MissingArguments {
                        supplied: args.len(),
                    })?;
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{arg:?}");
                    used += 1;
                }
                _ => return Err(ContractViolation::UnmatchedBrace { brace: '{', position }),
            },
            '}' => match chars.peek() {
                Some((_, '}')) => {
                    chars.next();
                    out.push('}');
                }
                _ => return Err(ContractViolation::UnmatchedBrace { brace: '}', position }),
            },
            other => out.push(other),
        }
    }

    if used != args.len() {
        return Err(ContractViolation::UnusedArguments {
            used,
            supplied: args.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_renders_nothing() {
        assert_eq!(Message::Standard.render(), Ok(None));
        assert!(Message::default().is_standard());
    }

    #[test]
    fn test_formatted_message() {
        let rendered = Message::from(format_args!("got {}", "x")).render();
        assert_eq!(rendered, Ok(Some("got x".to_string())));
    }

    #[test]
    fn test_template_substitutes_debug_forms() {
        let args: [&dyn fmt::Debug; 2] = [&"x", &3];
        let rendered = Message::template("got {} after {} tries", &args).render();
        assert_eq!(rendered, Ok(Some("got \"x\" after 3 tries".to_string())));
    }

    #[test]
    fn test_template_escapes() {
        let rendered = Message::template("{{literal}}", &[]).render();
        assert_eq!(rendered, Ok(Some("{literal}".to_string())));
    }

    #[test]
    fn test_template_missing_argument() {
        let args: [&dyn fmt::Debug; 1] = [&1];
        let err = Message::template("{} and {}", &args).render().unwrap_err();
        assert_eq!(err, ContractViolation::MissingArguments { supplied: 1 });
    }

    #[test]
    fn test_template_unused_argument() {
        let args: [&dyn fmt::Debug; 2] = [&1, &2];
        let err = Message::template("only {}", &args).render().unwrap_err();
        assert_eq!(err, ContractViolation::UnusedArguments { used: 1, supplied: 2 });
    }

    #[test]
    fn test_template_unmatched_braces() {
        let err = Message::template("open {x", &[]).render().unwrap_err();
        assert_eq!(err, ContractViolation::UnmatchedBrace { brace: '{', position: 5 });

        let err = Message::template("close }", &[]).render().unwrap_err();
        assert_eq!(err, ContractViolation::UnmatchedBrace { brace: '}', position: 6 });
    }
}
