//! Failure reporting shared by every check

use std::panic::Location;

use tracing::debug;

use crate::message::{render_template, Message};
use crate::sink::Sink;

/// Report through `t` unless `verdict` holds.
///
/// `standard` builds the default description and is only called on failure.
/// A custom message that cannot be rendered panics with the
/// [`ContractViolation`](crate::ContractViolation) instead of reaching the sink.
#[track_caller]
pub fn require<S, F>(t: &S, verdict: bool, standard: F, msg: Message<'_>)
where
    S: Sink + ?Sized,
    F: FnOnce() -> String,
{
    if verdict {
        return;
    }
    let location = Location::caller();
    t.mark_helper();

    match msg {
        Message::Standard => {
            let message = standard();
            debug!(%location, "assertion failed: {message}");
            t.fail_now(&message);
        }
        Message::Formatted(args) => {
            debug!(%location, "assertion failed: {args}");
            t.fail_now_fmt(args);
        }
        Message::Template { template, args } => match render_template(template, args) {
            Ok(message) => {
                debug!(%location, "assertion failed: {message}");
                t.fail_now(&message);
            }
            Err(violation) => panic!("vetting: {violation}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::sink::Recorder;

    #[test]
    fn test_passing_verdict_is_silent() {
        let t = Recorder::new();
        require(&t, true, || unreachable!("standard message built on success"), Message::Standard);

        assert!(!t.failed());
        assert_eq!(t.helper_marks(), 0);
    }

    #[test]
    fn test_standard_message() {
        let t = Recorder::new();
        require(&t, false, || "standard".to_string(), Message::Standard);

        assert_eq!(t.messages(), vec!["standard".to_string()]);
        assert_eq!(t.helper_marks(), 1);
    }

    #[test]
    fn test_custom_message_replaces_standard() {
        let t = Recorder::new();
        require(&t, false, || "standard".to_string(), Message::Formatted(format_args!("custom {}", 1)));

        let args: [&dyn fmt::Debug; 1] = [&"x"];
        require(&t, false, || "standard".to_string(), Message::template("got {}", &args));

        assert_eq!(t.messages(), vec!["custom 1".to_string(), "got \"x\"".to_string()]);
    }

    #[test]
    fn test_template_without_placeholders() {
        let t = Recorder::new();
        require(&t, false, || "standard".to_string(), Message::template("plain {{text}}", &[]));

        assert_eq!(t.messages(), vec!["plain {text}".to_string()]);
    }

    #[test]
    fn test_malformed_template_aborts_without_reporting() {
        let t = Recorder::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            require(&t, false, || "standard".to_string(), Message::template("{} {}", &[]));
        }));

        assert!(result.is_err());
        assert!(!t.failed());
    }
}
