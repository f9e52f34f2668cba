//! Vetting assertions
//!
//! Stateless checks for use inside test bodies. Every check computes a
//! verdict first and only then, if the verdict does not hold, reports a
//! failure through a caller-supplied [`Sink`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  check::* / check macros                     │
//! ├───────────────────┬───────────────────┬─────────────────────┤
//! │  introspect       │  sequence         │  report             │
//! │    Nilable        │    Sequence       │    require()        │
//! │    Zeroable       │    Lazy / lazy()  │    Message          │
//! │    Emptiable      │    Haystack       │    Sink             │
//! │    equal()        │    traverse()     │      Panicking      │
//! │                   │                   │      Recorder       │
//! └───────────────────┴───────────────────┴─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use vetting_assert::{contains, equal, Panicking};
//!
//! let t = Panicking;
//! equal!(t, 2 + 2, 4);
//! contains!(t, "abcdef", "cd");
//! contains!(t, vec![1, 2, 3], 2, "expected {} in the list", 2);
//! ```

pub mod check;
pub mod error;
pub mod introspect;
pub mod message;
pub mod report;
pub mod sequence;
pub mod sink;
mod macros;
mod unwind;

pub use error::ContractViolation;
pub use introspect::{Emptiable, Nilable, Zeroable};
pub use message::Message;
pub use sequence::{lazy, Haystack, Lazy, Sequence};
pub use sink::{Failure, Panicking, Recorder, Sink};
