//! Alignment core of the Ratcliff/Obershelp score.
//!
//! Two buffers are decomposed into the list of common runs the algorithm
//! aligns: the longest common substring is located first, then the fragments
//! to its left and to its right are matched recursively until no common
//! element remains. Only index ranges into the original buffers are handed
//! around, the elements themselves are never copied.

/// A common run of `len` elements starting at `a_start` / `b_start`.
///
/// Both offsets point at the leftmost occurrence of the run within the
/// fragment it was discovered in. A `len` of zero means no common element
/// was found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct MatchSpan {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Finds the longest substring of `a` that also occurs in `b`.
///
/// Start indices of `a` are scanned in increasing order and a candidate is
/// only accepted when it is strictly longer than the current best. Ties on
/// length therefore resolve towards the smallest start index in `a`, and the
/// reported `b_start` is the leftmost occurrence in `b`. Reproducible
/// alignments depend on this exact tie-break, so any shortcut taken here
/// must leave the reported span unchanged.
pub(crate) fn longest_match<Elem1, Elem2>(a: &[Elem1], b: &[Elem2]) -> MatchSpan
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    let mut best = MatchSpan::default();
    for i in 0..a.len() {
        // the remaining suffix can no longer beat the current best
        if a.len() - i <= best.len {
            break;
        }
        for len in 1..=(a.len() - i) {
            let needle = &a[i..i + len];
            // once a[i..i+len] is missing from b, every extension of it is too
            let Some(pos) = b.windows(len).position(|window| window == needle) else {
                break;
            };
            if len > best.len {
                best = MatchSpan {
                    a_start: i,
                    b_start: pos,
                    len,
                };
            }
        }
    }
    best
}

/// Decomposes `a` and `b` into the full list of aligned common runs.
///
/// The output order is the recursive concatenation {match, runs of the
/// front fragments, runs of the end fragments}. Fragment pairs are kept on
/// an explicit work list instead of the call stack, so the native stack
/// stays flat even when the alignment degenerates into a chain of
/// single-element matches.
pub(crate) fn matching_spans<Elem1, Elem2>(a: &[Elem1], b: &[Elem2]) -> Vec<MatchSpan>
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    let mut spans = Vec::new();
    let mut pending = vec![(0..a.len(), 0..b.len())];

    while let Some((a_range, b_range)) = pending.pop() {
        let found = longest_match(&a[a_range.clone()], &b[b_range.clone()]);
        if found.len == 0 {
            continue;
        }

        let span = MatchSpan {
            a_start: a_range.start + found.a_start,
            b_start: b_range.start + found.b_start,
            len: found.len,
        };
        spans.push(span);

        // end fragments are pushed first so the front pair is popped next,
        // which keeps the {match, front, end} output order
        pending.push((
            span.a_start + span.len..a_range.end,
            span.b_start + span.len..b_range.end,
        ));
        pending.push((a_range.start..span.a_start, b_range.start..span.b_start));
    }

    spans
}

/// Total number of elements aligned between `a` and `b`.
pub(crate) fn matched_len<Elem1, Elem2>(a: &[Elem1], b: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    matching_spans(a, b).iter().map(|span| span.len).sum()
}
