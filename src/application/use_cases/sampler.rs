use rand::seq::IndexedRandom;
use rand::Rng;

/// Bounded random sample without replacement.
///
/// Blank entries (empty after trimming) are discarded silently. When the
/// filtered pool fits within `k`, all entries come back in their original
/// relative order; otherwise exactly `k` entries are drawn uniformly, in
/// draw order. The randomness source is injected so callers can seed it.
pub fn sample_up_to<R: Rng + ?Sized>(items: &[String], k: usize, rng: &mut R) -> Vec<String> {
    let filtered: Vec<&String> = items.iter().filter(|item| !item.trim().is_empty()).collect();

    if filtered.len() <= k {
        return filtered.into_iter().cloned().collect();
    }

    filtered
        .choose_multiple(rng, k)
        .map(|item| (*item).clone())
        .collect()
}
