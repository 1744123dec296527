//! Euclidean rhythm generation using the Bjorklund algorithm
//!
//! Distributes a number of onsets as evenly as possible across a number of
//! steps by repeated bisection, then packs the result into a bitmask for
//! the firmware lookup table.

/// Largest step count the lookup table covers.
pub const MAX_STEPS: usize = 32;

/// Generate a Euclidean rhythm pattern using the Bjorklund algorithm
///
/// # Arguments
/// * `onsets` - Number of sounding steps in the pattern
/// * `steps` - Total number of steps in the pattern
///
/// # Returns
/// A vector of booleans where `true` is an onset and `false` is a rest.
/// The first onset always falls on step 0 when `onsets > 0`.
///
/// # Examples
/// ```
/// use rhythm_core::euclid::euclidean_pattern;
///
/// // Classic 4-on-the-floor over 8 steps
/// let pattern = euclidean_pattern(4, 8);
/// assert_eq!(pattern.len(), 8);
/// assert_eq!(pattern.iter().filter(|&&x| x).count(), 4);
/// ```
pub fn euclidean_pattern(onsets: usize, steps: usize) -> Vec<bool> {
    // Edge cases
    if steps == 0 {
        return Vec::new();
    }

    if onsets == 0 {
        return vec![false; steps];
    }

    if onsets >= steps {
        return vec![true; steps];
    }

    // One group per step: onset groups first, then rest groups
    let mut groups: Vec<Vec<bool>> = Vec::with_capacity(steps);
    for _ in 0..onsets {
        groups.push(vec![true]);
    }
    for _ in onsets..steps {
        groups.push(vec![false]);
    }

    // Bisection: fold tail groups into head groups until the head run
    // can no longer be paired
    let mut k = onsets;
    while k > 0 {
        let cut = k.min(groups.len() - k);
        if cut == 0 {
            break;
        }

        let mut next: Vec<Vec<bool>> = Vec::with_capacity(groups.len() - cut);

        for i in 0..cut {
            let mut combined = groups[i].clone();
            combined.extend_from_slice(&groups[k + i]);
            next.push(combined);
        }

        // Unpaired head groups, then unpaired tail groups, in order
        for group in &groups[cut..k] {
            next.push(group.clone());
        }

        for group in &groups[k + cut..] {
            next.push(group.clone());
        }

        groups = next;
        k = cut;
    }

    // Group contents stay flat under concatenation, so this yields the
    // steps in left-to-right order
    groups.into_iter().flatten().collect()
}

/// Pack the Euclidean rhythm for `onsets` over `steps` into a bitmask,
/// bit `i` set iff step `i` is an onset. `onsets` is clamped to `steps`.
pub fn euclidean_bitmask(onsets: usize, steps: usize) -> u32 {
    debug_assert!(steps <= MAX_STEPS);

    let onsets = onsets.min(steps);
    let mut bits = 0u32;
    for (i, &onset) in euclidean_pattern(onsets, steps).iter().enumerate() {
        if onset {
            bits |= 1 << i;
        }
    }
    bits
}

/// Build the full Euclidean lookup table: every step count from 1 to 32
/// crossed with every raw onset count from 0 to 31 (clamped to the step
/// count), in row-major order. Entry index is `(steps - 1) * 32 + onsets`.
pub fn euclidean_table() -> Vec<u32> {
    let mut table = Vec::with_capacity(MAX_STEPS * MAX_STEPS);
    for steps in 1..=MAX_STEPS {
        for onsets in 0..MAX_STEPS {
            table.push(euclidean_bitmask(onsets, steps));
        }
    }
    table
}
