#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqratio::distance::ratcliff_obershelp;
use seqratio::score;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    ratcliff_obershelp::normalized_similarity(texts.s1.chars(), texts.s2.chars(), None, None);

    let _ = score::distance(Some(texts.s1.chars()), Some(texts.s2.chars()));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
