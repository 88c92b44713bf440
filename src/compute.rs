/// Number of readings summed into one sliding window.
pub const WINDOW: usize = 3;

/// Counts readings that are strictly larger than the one before them.
pub fn count_increases(depths: &[i64]) -> usize {
    let mut count = 0;
    for i in 1..depths.len() {
        if depths[i - 1] < depths[i] {
            count += 1;
        }
    }
    count
}

/// Counts windows of `WINDOW` readings whose sum is strictly larger than the sum of the window
/// one position earlier.
pub fn count_window_increases(depths: &[i64]) -> usize {
    depths
        .windows(WINDOW + 1)
        .filter(|w| window_sum(&w[..WINDOW]) < window_sum(&w[1..]))
        .count()
}

// the middle terms of two neighbouring windows cancel out, so comparing the readings that are
// WINDOW apart gives the same answer without doing any sums.
pub fn count_window_increases_direct(depths: &[i64]) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(WINDOW))
        .filter(|(first, last)| first < last)
        .count()
}

// widened so three i64 extremes can't overflow
#[inline]
fn window_sum(window: &[i64]) -> i128 {
    window.iter().map(|&v| v as i128).sum()
}
