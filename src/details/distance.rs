//! Shared scaffolding for metrics that are scored as a similarity count.
//!
//! A metric implements [`SimilarityMetricUsize`] and gets the distance and
//! both normalized variants derived from it, so every metric in the family
//! converts between the four views of a score the same way.

pub(crate) fn norm_sim_to_norm_dist(score_cutoff: f64) -> f64 {
    let imprecision = 0.00001;
    (1.0 - score_cutoff + imprecision).min(1.0)
}

pub(crate) trait SimilarityMetricUsize {
    fn maximum(&self, len1: usize, len2: usize) -> usize;

    fn _similarity<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: usize,
        score_hint: usize,
    ) -> usize
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy;

    fn _distance<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: usize,
        score_hint: usize,
    ) -> usize
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy,
    {
        let maximum = self.maximum(len1, len2);

        let cutoff_similarity = if maximum >= score_cutoff {
            maximum - score_cutoff
        } else {
            0
        };
        let hint_similarity = if maximum >= score_hint {
            maximum - score_hint
        } else {
            0
        };

        let sim = self._similarity(s1, len1, s2, len2, cutoff_similarity, hint_similarity);
        let dist = maximum - sim;

        if dist <= score_cutoff {
            dist
        } else {
            score_cutoff + 1
        }
    }
}

pub(crate) trait NormalizedMetricUsize {
    fn _normalized_distance<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
        score_hint: f64,
    ) -> f64
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy;

    fn _normalized_similarity<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
        score_hint: f64,
    ) -> f64
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy;
}

impl<T: SimilarityMetricUsize> NormalizedMetricUsize for T {
    fn _normalized_distance<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
        score_hint: f64,
    ) -> f64
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy,
    {
        let maximum = self.maximum(len1, len2);

        let cutoff_distance = (maximum as f64 * score_cutoff).ceil() as usize;
        let hint_distance = (maximum as f64 * score_hint).ceil() as usize;

        let dist = self._distance(s1, len1, s2, len2, cutoff_distance, hint_distance);
        let norm_dist = if maximum == 0 {
            0.0
        } else {
            dist as f64 / maximum as f64
        };
        if norm_dist <= score_cutoff {
            norm_dist
        } else {
            1.0
        }
    }

    fn _normalized_similarity<Iter1, Iter2, Elem1, Elem2>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
        score_hint: f64,
    ) -> f64
    where
        Iter1: Iterator<Item = Elem1> + Clone,
        Iter2: Iterator<Item = Elem2> + Clone,
        Elem1: PartialEq<Elem2> + Copy,
        Elem2: PartialEq<Elem1> + Copy,
    {
        let cutoff_score = norm_sim_to_norm_dist(score_cutoff);
        let hint_score = norm_sim_to_norm_dist(score_hint);

        let norm_dist = self._normalized_distance(s1, len1, s2, len2, cutoff_score, hint_score);
        let norm_sim = 1.0 - norm_dist;

        if norm_sim >= score_cutoff {
            norm_sim
        } else {
            0.0
        }
    }
}
