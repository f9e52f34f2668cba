//! The checks
//!
//! Every function takes the sink first and a [`Message`] last. The verdict
//! is computed before anything is reported, and a passing check never
//! touches the sink. The macros exported at the crate root wrap these
//! functions and turn optional trailing arguments into a [`Message`].

use std::any::{type_name, Any};
use std::fmt::{Debug, Display};
use std::{mem, ptr};

use crate::introspect::{self, Emptiable, Nilable, Zeroable};
use crate::message::Message;
use crate::report::require;
use crate::sequence::{traverse, Haystack, Sequence};
use crate::sink::Sink;
use crate::unwind;

#[track_caller]
pub fn nil<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Nilable + Debug,
{
    require(t, v.is_nil(), || format!("expected nil value, got {v:?}"), msg);
}

#[track_caller]
pub fn not_nil<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Nilable,
{
    require(t, !v.is_nil(), || "expected not nil value".to_string(), msg);
}

#[track_caller]
pub fn zero<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Zeroable + Debug,
{
    require(
        t,
        v.is_zero(),
        || format!("expected zero value for the type {}, got {v:?}", type_name::<V>()),
        msg,
    );
}

#[track_caller]
pub fn not_zero<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Zeroable,
{
    require(
        t,
        !v.is_zero(),
        || format!("expected non-zero value for the type {}", type_name::<V>()),
        msg,
    );
}

#[track_caller]
pub fn empty<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Emptiable + Debug,
{
    require(t, Emptiable::is_empty(&v), || format!("expected empty, but got {v:?}"), msg);
}

#[track_caller]
pub fn not_empty<S, V>(t: &S, v: V, msg: Message<'_>)
where
    S: Sink + ?Sized,
    V: Emptiable + Debug,
{
    require(t, !Emptiable::is_empty(&v), || format!("expected not empty, but got {v:?}"), msg);
}

#[track_caller]
pub fn is_true<S: Sink + ?Sized>(t: &S, got: bool, msg: Message<'_>) {
    require(t, got, || "didn't get true".to_string(), msg);
}

#[track_caller]
pub fn is_false<S: Sink + ?Sized>(t: &S, got: bool, msg: Message<'_>) {
    require(t, !got, || "didn't get false".to_string(), msg);
}

#[track_caller]
pub fn equal<S, A, B>(t: &S, a: A, b: B, msg: Message<'_>)
where
    S: Sink + ?Sized,
    A: PartialEq<B> + Debug,
    B: Debug,
{
    require(
        t,
        introspect::equal(&a, &b),
        || format!("expected equal values, but got {a:?} and {b:?}"),
        msg,
    );
}

#[track_caller]
pub fn not_equal<S, A, B>(t: &S, a: A, b: B, msg: Message<'_>)
where
    S: Sink + ?Sized,
    A: PartialEq<B> + Debug,
    B: Debug,
{
    require(
        t,
        !introspect::equal(&a, &b),
        || format!("expected different values, but {a:?} is equal to {b:?}"),
        msg,
    );
}

#[track_caller]
pub fn equal_func<S, T, F>(t: &S, a: T, b: T, cmp: F, msg: Message<'_>)
where
    S: Sink + ?Sized,
    T: Debug,
    F: FnOnce(&T, &T) -> bool,
{
    require(
        t,
        cmp(&a, &b),
        || format!("{a:?} and {b:?} aren't the same according to the comparator"),
        msg,
    );
}

#[track_caller]
pub fn not_equal_func<S, T, F>(t: &S, a: T, b: T, cmp: F, msg: Message<'_>)
where
    S: Sink + ?Sized,
    T: Debug,
    F: FnOnce(&T, &T) -> bool,
{
    require(
        t,
        !cmp(&a, &b),
        || format!("{a:?} and {b:?} are the same according to the comparator"),
        msg,
    );
}

/// Exact error identity: both absent, or both the very same error value.
fn same_error<E: Debug + ?Sized>(got: Option<&E>, want: Option<&E>) -> bool {
    match (got, want) {
        (None, None) => true,
        (Some(got), Some(want)) => same_object(got, want),
        _ => false,
    }
}

/// Do `a` and `b` refer to one object, not merely one address?
///
/// Zero-sized values, and a value and its first field, can share an address.
/// Equal metadata settles identity. Otherwise the layouts and the `Debug`
/// renderings must agree: the same type may reach here through two copies
/// of its vtable.
fn same_object<E: Debug + ?Sized>(a: &E, b: &E) -> bool {
    if !ptr::addr_eq(a, b) {
        return false;
    }
    if ptr::eq(a, b) {
        return true;
    }
    mem::size_of_val(a) == mem::size_of_val(b)
        && mem::align_of_val(a) == mem::align_of_val(b)
        && format!("{a:?}") == format!("{b:?}")
}

fn describe_error<E: Display + ?Sized>(err: Option<&E>) -> String {
    match err {
        Some(err) => err.to_string(),
        None => "no error".to_string(),
    }
}

/// Passes when `got` is the same error as `want`.
///
/// Errors are compared by identity, not by value: two distinct errors with
/// the same message are different. Use [`equal`] to compare error kinds.
#[track_caller]
pub fn error<S, E>(t: &S, got: Option<&E>, want: Option<&E>, msg: Message<'_>)
where
    S: Sink + ?Sized,
    E: Debug + Display + ?Sized,
{
    require(
        t,
        same_error(got, want),
        || format!("expected error {}, but got {}", describe_error(want), describe_error(got)),
        msg,
    );
}

#[track_caller]
pub fn not_error<S, E>(t: &S, got: Option<&E>, not_want: Option<&E>, msg: Message<'_>)
where
    S: Sink + ?Sized,
    E: Debug + Display + ?Sized,
{
    require(
        t,
        !same_error(got, not_want),
        || format!("didn't expect error {}, but got it", describe_error(not_want)),
        msg,
    );
}

#[track_caller]
pub fn contains<S, C, T>(t: &S, container: C, target: T, msg: Message<'_>)
where
    S: Sink + ?Sized,
    C: Haystack<T>,
    T: Debug,
{
    require(
        t,
        container.holds(&target),
        || format!("{target:?} isn't in the collection"),
        msg,
    );
}

#[track_caller]
pub fn not_contains<S, C, T>(t: &S, container: C, target: T, msg: Message<'_>)
where
    S: Sink + ?Sized,
    C: Haystack<T>,
    T: Debug,
{
    require(
        t,
        !container.holds(&target),
        || format!("{target:?} is in the collection"),
        msg,
    );
}

#[track_caller]
pub fn contains_func<S, C, P>(t: &S, container: C, predicate: P, msg: Message<'_>)
where
    S: Sink + ?Sized,
    C: Sequence,
    P: FnMut(&C::Item) -> bool,
{
    require(
        t,
        traverse(container, predicate),
        || "there's no element matching the predicate".to_string(),
        msg,
    );
}

#[track_caller]
pub fn not_contains_func<S, C, P>(t: &S, container: C, predicate: P, msg: Message<'_>)
where
    S: Sink + ?Sized,
    C: Sequence,
    P: FnMut(&C::Item) -> bool,
{
    require(
        t,
        !traverse(container, predicate),
        || "there's an element matching the predicate".to_string(),
        msg,
    );
}

#[track_caller]
pub fn has_prefix<S: Sink + ?Sized>(t: &S, s: &str, prefix: &str, msg: Message<'_>) {
    require(
        t,
        s.starts_with(prefix),
        || format!("{prefix:?} is not a prefix of {s:?}"),
        msg,
    );
}

#[track_caller]
pub fn has_no_prefix<S: Sink + ?Sized>(t: &S, s: &str, prefix: &str, msg: Message<'_>) {
    require(
        t,
        !s.starts_with(prefix),
        || format!("{prefix:?} is a prefix of {s:?}"),
        msg,
    );
}

#[track_caller]
pub fn has_suffix<S: Sink + ?Sized>(t: &S, s: &str, suffix: &str, msg: Message<'_>) {
    require(
        t,
        s.ends_with(suffix),
        || format!("{suffix:?} is not a suffix of {s:?}"),
        msg,
    );
}

#[track_caller]
pub fn has_no_suffix<S: Sink + ?Sized>(t: &S, s: &str, suffix: &str, msg: Message<'_>) {
    require(
        t,
        !s.ends_with(suffix),
        || format!("{suffix:?} is a suffix of {s:?}"),
        msg,
    );
}

/// Passes when `f` panics. The panic never reaches the caller.
///
/// The unwind is caught, but the process-wide panic hook still runs first,
/// so a passing check prints the usual `thread '..' panicked at ..` line
/// (and a backtrace under `RUST_BACKTRACE`). The test harness captures it
/// unless `--nocapture` is given. The same holds for [`not_panics`] and
/// [`panic_is`]. The hook is global and tests run in parallel, so it is not
/// swapped out here.
///
/// ```rust
/// use vetting_assert::{panics, Recorder};
///
/// let t = Recorder::new();
/// panics!(t, || panic!("boom"));
/// panics!(t, || {});
/// assert_eq!(t.messages(), vec!["didn't panic".to_string()]);
/// ```
#[track_caller]
pub fn panics<S, F>(t: &S, f: F, msg: Message<'_>)
where
    S: Sink + ?Sized,
    F: FnOnce(),
{
    let payload = unwind::capture(f);
    require(t, payload.is_some(), || "didn't panic".to_string(), msg);
}

#[track_caller]
pub fn not_panics<S, F>(t: &S, f: F, msg: Message<'_>)
where
    S: Sink + ?Sized,
    F: FnOnce(),
{
    let payload = unwind::capture(f);
    require(
        t,
        payload.is_none(),
        || match &payload {
            Some(payload) => format!("did panic, {}", unwind::describe(&**payload)),
            None => "did panic".to_string(),
        },
        msg,
    );
}

/// Passes when `f` panics with a payload equal to `expected`.
///
/// Payloads of type `E` are compared directly. Text payloads from
/// `panic!` also match a `&str` or `String` with the same text. The panic
/// hook still prints the caught panic, see [`panics`].
#[track_caller]
pub fn panic_is<S, F, E>(t: &S, f: F, expected: E, msg: Message<'_>)
where
    S: Sink + ?Sized,
    F: FnOnce(),
    E: Any + PartialEq + Debug,
{
    let payload = unwind::capture(f);
    let verdict = payload
        .as_deref()
        .is_some_and(|payload| unwind::matches(payload, &expected));
    require(
        t,
        verdict,
        || match &payload {
            Some(payload) => format!(
                "expected panic {expected:?}, got {}",
                unwind::describe(&**payload)
            ),
            None => format!("expected panic {expected:?}, but didn't panic"),
        },
        msg,
    );
}

#[track_caller]
pub fn greater<S, T>(t: &S, a: T, b: T, msg: Message<'_>)
where
    S: Sink + ?Sized,
    T: PartialOrd + Debug,
{
    require(t, a > b, || format!("{a:?} is not greater than {b:?}"), msg);
}

#[track_caller]
pub fn smaller<S, T>(t: &S, a: T, b: T, msg: Message<'_>)
where
    S: Sink + ?Sized,
    T: PartialOrd + Debug,
{
    require(t, a < b, || format!("{a:?} is not smaller than {b:?}"), msg);
}
