// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets of a deck in colexicographic order.
use super::Deck;

/// The largest hand size supported by the deck iteration.
pub(crate) const MAX_K: usize = 7;

/// Binomial coefficients nck(n, k) for n <= 52 and k <= 7.
const BINOMIALS: [[u32; MAX_K + 1]; Deck::SIZE + 1] = make_binomials();

const fn make_binomials() -> [[u32; MAX_K + 1]; Deck::SIZE + 1] {
    let mut t = [[0u32; MAX_K + 1]; Deck::SIZE + 1];
    let mut n = 0;

    while n <= Deck::SIZE {
        t[n][0] = 1;

        // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
        let mut k = 1;
        while k <= MAX_K && k <= n {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

/// Returns the binomial coefficient for n choose k, zero when k > n.
#[inline]
pub(crate) fn binomial(n: usize, k: usize) -> usize {
    assert!(n <= Deck::SIZE, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");

    BINOMIALS[n][k] as usize
}

/// Converts a rank in the combinatorial number system to its k-subset
/// (see Theorem L pg. 360 Knuth 4A), positions are in increasing order.
pub(crate) fn nth_ksubset(mut nth: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut subset = [0; MAX_K];
    for i in (1..=k).rev() {
        // Largest c such that nck(c, i) <= nth.
        let mut c = i - 1;
        while binomial(c + 1, i) <= nth {
            c += 1;
        }

        subset[i - 1] = c;
        nth -= binomial(c, i);
    }

    subset
}

/// Calls `f` for `count` k-subsets of 0..n starting from the nth subset.
pub(crate) fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!(k <= n && k <= MAX_K);

    // Algorithm L from TAOCP 4A with n as sentinel after the last position.
    let mut c = [0usize; MAX_K + 1];
    c[..k].copy_from_slice(&nth_ksubset(nth, k)[..k]);
    c[k] = n;

    for _ in 0..count {
        f(&c[..k]);

        let mut j = 0;
        while j < k && c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j == k {
            break;
        }

        c[j] += 1;
    }
}
