//! Panic capture around a single callable

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub(crate) type Payload = Box<dyn Any + Send + 'static>;

/// Run `f`, returning the panic payload if it unwound.
///
/// The global panic hook has already run by the time the payload is caught.
pub(crate) fn capture<F: FnOnce()>(f: F) -> Option<Payload> {
    panic::catch_unwind(AssertUnwindSafe(f)).err()
}

/// Message carried by `panic!`, which is a `&'static str` or a `String`.
pub(crate) fn text(value: &dyn Any) -> Option<&str> {
    value
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| value.downcast_ref::<String>().map(String::as_str))
}

/// Does `payload` equal `expected`, either as the same type or as text?
pub(crate) fn matches<E: Any + PartialEq>(payload: &(dyn Any + Send), expected: &E) -> bool {
    if let Some(value) = payload.downcast_ref::<E>() {
        return value == expected;
    }
    match (text(payload), text(expected)) {
        (Some(actual), Some(wanted)) => actual == wanted,
        _ => false,
    }
}

pub(crate) fn describe(payload: &(dyn Any + Send)) -> String {
    match text(payload) {
        Some(message) => format!("{message:?}"),
        None => "a non-text payload".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Sentinel {
        Boom,
        Other,
    }

    #[test]
    fn test_capture_returns_payload_only_on_panic() {
        assert!(capture(|| {}).is_none());

        let payload = capture(|| panic!("boom")).expect("closure panics");
        assert_eq!(text(&*payload), Some("boom"));
    }

    #[test]
    fn test_formatted_panics_carry_strings() {
        let payload = capture(|| panic!("boom {}", 7)).expect("closure panics");
        assert!(matches(&*payload, &"boom 7"));
        assert!(matches(&*payload, &String::from("boom 7")));
        assert!(!matches(&*payload, &"boom"));
    }

    #[test]
    fn test_typed_payloads() {
        let payload = capture(|| panic::panic_any(Sentinel::Boom)).expect("closure panics");
        assert!(matches(&*payload, &Sentinel::Boom));
        assert!(!matches(&*payload, &Sentinel::Other));
        assert!(!matches(&*payload, &"Boom"));
        assert_eq!(describe(&*payload), "a non-text payload");
    }
}
