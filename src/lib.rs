//! `seqratio` scores the similarity of two sequences with the
//! Ratcliff/Obershelp pattern-recognition algorithm, also known as gestalt
//! pattern matching.
//!
//! ## Key Features
//!
//! - **Faithful alignment semantics**: the longest-common-substring search
//!   uses a deterministic scan and tie-break, so scores are reproducible
//!   across runs and releases. The scan is tied to the first argument, which
//!   makes the score slightly asymmetric; this behavior is kept stable
//!   instead of being papered over.
//! - **Generic inputs**: anything iterable over comparable, copyable
//!   elements can be compared, from `str::chars` and `str::bytes` to slices
//!   of numbers.
//! - **Checked and unchecked entry points**: the [`distance`] module exposes
//!   the raw and normalized scores as total functions, while [`score`]
//!   rejects absent inputs with a descriptive error before any work runs.
//!
//! ## Installation
//!
//! The installation is as simple as:
//! ```console
//! $ cargo add seqratio
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seqratio::distance::ratcliff_obershelp;
//! use seqratio::score;
//!
//! // Perform a simple comparison; the score is 0.9655
//! let score = ratcliff_obershelp::normalized_similarity(
//!     "this is a test".chars(),
//!     "this is a test!".chars(),
//!     None,
//!     None,
//! );
//! assert!((score - 0.9655).abs() < 1e-4);
//!
//! // If you are sure the input strings are ascii only it's usually faster to operate on bytes
//! let score = ratcliff_obershelp::normalized_similarity(
//!     "this is a test".bytes(),
//!     "this is a test!".bytes(),
//!     None,
//!     None,
//! );
//! assert!((score - 0.9655).abs() < 1e-4);
//!
//! // You can provide a score_cutoff value to filter out scores below it
//! assert_eq!(
//!     0.0,
//!     ratcliff_obershelp::normalized_similarity("abcd".chars(), "bcda".chars(), 0.9, None)
//! );
//!
//! // The checked entry points reject absent inputs instead of scoring them
//! assert_eq!(Ok(1.0), score::similarity(Some("abc".chars()), Some("abc".chars())));
//! assert!(score::distance(None::<std::str::Chars>, Some("abc".chars())).is_err());
//! ```

#![forbid(unsafe_code)]
#![allow(
    // lengths are converted to f64 for the normalized scores. Inputs long
    // enough to lose precision there are far beyond what the scan can
    // process in the first place
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions
)]

pub(crate) mod details;
pub mod distance;
pub mod score;
