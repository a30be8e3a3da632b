//! Checked scoring entry points.
//!
//! [`similarity`] and [`distance`] wrap the normalized
//! [`ratcliff_obershelp`](crate::distance::ratcliff_obershelp) scores for
//! callers that hand over possibly-absent inputs: a missing sequence is
//! rejected up front with [`MissingInput`] naming the parameter, before any
//! matching work runs.

use thiserror::Error;

use crate::distance::ratcliff_obershelp;

/// A required input sequence was not provided.
///
/// Carries the name of the offending parameter. This is a contract
/// violation on the caller's side, not a transient condition; repeating the
/// call with the same inputs fails identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument: `{0}` must be provided")]
pub struct MissingInput(pub &'static str);

/// Normalized Ratcliff/Obershelp similarity in the range `[0.0, 1.0]`.
///
/// `1.0` means identical content. Identical inputs are scored without
/// running the alignment.
///
/// # Errors
///
/// [`MissingInput`] if `s1` or `s2` is `None`.
///
/// # Example
/// ```
/// use seqratio::score;
///
/// assert_eq!(Ok(1.0), score::similarity(Some("abc".chars()), Some("abc".chars())));
/// assert_eq!(
///     Err(score::MissingInput("s2")),
///     score::similarity(Some("abc".chars()), None::<std::str::Chars>)
/// );
/// ```
pub fn similarity<Iter1, Iter2, Elem1, Elem2>(
    s1: Option<Iter1>,
    s2: Option<Iter2>,
) -> Result<f64, MissingInput>
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    let s1 = s1.ok_or(MissingInput("s1"))?;
    let s2 = s2.ok_or(MissingInput("s2"))?;
    Ok(ratcliff_obershelp::normalized_similarity(s1, s2, None, None))
}

/// Normalized Ratcliff/Obershelp distance, `1.0 - similarity`.
///
/// # Errors
///
/// [`MissingInput`] if `s1` or `s2` is `None`.
///
/// # Example
/// ```
/// use seqratio::score;
///
/// assert_eq!(Ok(0.8), score::distance(Some("hello".chars()), Some("world".chars())));
/// ```
pub fn distance<Iter1, Iter2, Elem1, Elem2>(
    s1: Option<Iter1>,
    s2: Option<Iter2>,
) -> Result<f64, MissingInput>
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    let s1 = s1.ok_or(MissingInput("s1"))?;
    let s2 = s2.ok_or(MissingInput("s2"))?;
    Ok(ratcliff_obershelp::normalized_distance(s1, s2, None, None))
}
