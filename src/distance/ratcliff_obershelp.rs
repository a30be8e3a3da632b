//! Ratcliff/Obershelp similarity
//!
//! The Ratcliff/Obershelp similarity (also known as gestalt pattern
//! matching) measures how much of two sequences can be aligned as common
//! substrings. The longest common substring is located first, the fragments
//! on both sides of it are aligned recursively, and the score relates the
//! total number of aligned elements to the combined input length:
//!
//! `similarity = 2 * matched / (len1 + len2)`
//!
//! This favors long contiguous runs over scattered single-element overlap,
//! which makes the score a good fit for deduplication, search ranking and
//! spell correction.
//!
//! The search for the longest common substring is tied to the first
//! sequence: among several equally long candidates the one starting earliest
//! in `s1` wins. Swapping the arguments can therefore change the score.
//! This asymmetry is observable behavior and is kept stable.
//!
//! # Performance
//!
//! The implementation is the classic scan: locating a single match costs up
//! to `O(N²*M)` and the recursion repeats it once per aligned run. Highly
//! repetitive inputs hit the worst case; callers that need bounded latency
//! on adversarial inputs have to cap input lengths themselves.

use crate::details::distance::{NormalizedMetricUsize, SimilarityMetricUsize};
use crate::details::matching;

pub(crate) struct IndividualComparator {}

impl SimilarityMetricUsize for IndividualComparator {
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        len1 + len2
    }

    fn _similarity<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: usize,
        _score_hint: usize,
    ) -> usize
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy,
    {
        // identical inputs score the full length without running the alignment
        let sim = if len1 == len2 && s1.clone().eq(s2.clone()) {
            len1 + len2
        } else {
            let s1: Vec<Elem1> = s1.collect();
            let s2: Vec<Elem2> = s2.collect();
            2 * matching::matched_len(&s1, &s2)
        };

        if sim >= score_cutoff {
            sim
        } else {
            0
        }
    }
}

/// Ratcliff/Obershelp distance in the range `[0, len1 + len2]`.
///
/// This is the number of elements left unaligned on both sides combined,
/// `len1 + len2 - 2 * matched`. Returns `score_cutoff + 1` when the distance
/// exceeds `score_cutoff`.
pub fn distance<Iter1, Iter2, Elem1, Elem2, ScoreCutoff, ScoreHint>(
    s1: Iter1,
    s2: Iter2,
    score_cutoff: ScoreCutoff,
    score_hint: ScoreHint,
) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
    ScoreCutoff: Into<Option<usize>>,
    ScoreHint: Into<Option<usize>>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    IndividualComparator {}._distance(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        score_cutoff.into().unwrap_or(usize::MAX),
        score_hint.into().unwrap_or(usize::MAX),
    )
}

/// Ratcliff/Obershelp similarity in the range `[0, len1 + len2]`.
///
/// This is the doubled number of aligned elements, `2 * matched`. Returns 0
/// when the similarity falls below `score_cutoff`.
pub fn similarity<Iter1, Iter2, Elem1, Elem2, ScoreCutoff, ScoreHint>(
    s1: Iter1,
    s2: Iter2,
    score_cutoff: ScoreCutoff,
    score_hint: ScoreHint,
) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
    ScoreCutoff: Into<Option<usize>>,
    ScoreHint: Into<Option<usize>>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    IndividualComparator {}._similarity(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        score_cutoff.into().unwrap_or(0),
        score_hint.into().unwrap_or(0),
    )
}

/// Normalized Ratcliff/Obershelp distance in the range `[0.0, 1.0]`.
///
/// Returns 1.0 when the distance exceeds `score_cutoff`.
pub fn normalized_distance<Iter1, Iter2, Elem1, Elem2, ScoreCutoff, ScoreHint>(
    s1: Iter1,
    s2: Iter2,
    score_cutoff: ScoreCutoff,
    score_hint: ScoreHint,
) -> f64
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
    ScoreCutoff: Into<Option<f64>>,
    ScoreHint: Into<Option<f64>>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    IndividualComparator {}._normalized_distance(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        score_cutoff.into().unwrap_or(1.0),
        score_hint.into().unwrap_or(1.0),
    )
}

/// Normalized Ratcliff/Obershelp similarity in the range `[0.0, 1.0]`.
///
/// `1.0` means identical content. Returns 0.0 when the similarity falls
/// below `score_cutoff`.
///
/// # Example
/// ```
/// use seqratio::distance::ratcliff_obershelp;
///
/// // score is 0.2
/// let score =
///     ratcliff_obershelp::normalized_similarity("hello".chars(), "world".chars(), None, None);
/// assert!((score - 0.2).abs() < 1e-9);
/// ```
pub fn normalized_similarity<Iter1, Iter2, Elem1, Elem2, ScoreCutoff, ScoreHint>(
    s1: Iter1,
    s2: Iter2,
    score_cutoff: ScoreCutoff,
    score_hint: ScoreHint,
) -> f64
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator<Item = Elem2>,
    Iter2::IntoIter: Clone,
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
    ScoreCutoff: Into<Option<f64>>,
    ScoreHint: Into<Option<f64>>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    IndividualComparator {}._normalized_similarity(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        score_cutoff.into().unwrap_or(0.0),
        score_hint.into().unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            if ($x - $y).abs() > 0.0001 {
                panic!("{:?} != {:?}", $x, $y);
            }
        };
    }

    fn norm_sim(s1: &str, s2: &str) -> f64 {
        normalized_similarity(s1.chars(), s2.chars(), None, None)
    }

    fn norm_dist(s1: &str, s2: &str) -> f64 {
        normalized_distance(s1.chars(), s2.chars(), None, None)
    }

    #[test]
    fn similar() {
        assert_eq!(8, similarity("aaaa".chars(), "aaaa".chars(), None, None));
        assert_eq!(0, distance("aaaa".chars(), "aaaa".chars(), None, None));
        assert_delta!(1.0, norm_sim("abc", "abc"));
        assert_delta!(0.0, norm_dist("abc", "abc"));
    }

    #[test]
    fn both_empty() {
        assert_eq!(0, similarity("".chars(), "".chars(), None, None));
        assert_eq!(0, distance("".chars(), "".chars(), None, None));
        assert_delta!(1.0, norm_sim("", ""));
        assert_delta!(0.0, norm_dist("", ""));
    }

    #[test]
    fn one_empty() {
        assert_delta!(0.0, norm_sim("abc", ""));
        assert_delta!(0.0, norm_sim("", "abc"));
        assert_delta!(1.0, norm_dist("abc", ""));
    }

    #[test]
    fn completely_different() {
        assert_eq!(0, similarity("abc".chars(), "xyz".chars(), None, None));
        assert_eq!(6, distance("abc".chars(), "xyz".chars(), None, None));
        assert_delta!(0.0, norm_sim("abc", "xyz"));
        assert_delta!(1.0, norm_dist("abc", "xyz"));
    }

    #[test]
    fn single_aligned_element() {
        // the only aligned run between "hello" and "world" is the "l" locked
        // in at index 2 of the first argument
        assert_eq!(2, similarity("hello".chars(), "world".chars(), None, None));
        assert_delta!(0.2, norm_sim("hello", "world"));
        assert_delta!(0.8, norm_dist("hello", "world"));
    }

    #[test]
    fn recursion_aligns_fragment_runs() {
        // "abcd" / "bcde": "bcd" plus nothing from the outer fragments
        assert_eq!(6, similarity("abcd".chars(), "bcde".chars(), None, None));
        assert_delta!(0.75, norm_sim("abcd", "bcde"));
    }

    #[test]
    fn score_is_not_symmetric() {
        // the tie-break scans the first argument, so swapping the inputs
        // may align a different amount
        assert_delta!(0.25, norm_sim("tide", "diet"));
        assert_delta!(0.5, norm_sim("diet", "tide"));
    }

    #[test]
    fn numbers() {
        assert_eq!(4, similarity([1, 2, 3], [1, 2, 4], None, None));
        assert_eq!(2, distance([1, 2, 3], [1, 2, 4], None, None));
        assert_delta!(
            2.0 / 3.0,
            normalized_similarity([1, 2, 3], [1, 2, 4], None, None)
        );
    }

    #[test]
    fn unicode() {
        // "нко" is the only aligned run
        assert_delta!(6.0 / 14.0, norm_sim("Иванко", "Петренко"));
    }

    #[test]
    fn score_cutoff() {
        assert_eq!(
            2,
            similarity("hello".chars(), "world".chars(), 2, None)
        );
        assert_eq!(
            0,
            similarity("hello".chars(), "world".chars(), 3, None)
        );
        assert_eq!(8, distance("hello".chars(), "world".chars(), None, None));
        assert_eq!(6, distance("hello".chars(), "world".chars(), 5, None));
        assert_delta!(0.2, normalized_similarity("hello".chars(), "world".chars(), 0.2, None));
        assert_delta!(
            0.0,
            normalized_similarity("hello".chars(), "world".chars(), 0.3, None)
        );
        assert_delta!(
            1.0,
            normalized_distance("hello".chars(), "world".chars(), 0.5, None)
        );
    }
}
