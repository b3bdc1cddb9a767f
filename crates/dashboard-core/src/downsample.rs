// File: crates/dashboard-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction for index-ordered sample series.

/// LTTB over `(index, value)` pairs, returning at most `threshold` values in order.
/// The first and last samples are kept whenever `threshold >= 2`.
pub fn lttb(samples: &[f64], threshold: usize) -> Vec<f64> {
    let n = samples.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold == 1 { return vec![samples[0]]; }
    if threshold >= n { return samples.to_vec(); }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(samples[0]);

    // index of the point picked from the previous bucket
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);

        // average of the next bucket; the last bucket averages onto the final sample
        let next_end = ((1.0 + (i + 2) as f64 * bucket_size).floor() as usize).min(n);
        let next = end..next_end.max(end + 1);
        let count = next.len() as f64;
        let avg_x = next.clone().map(|k| k as f64).sum::<f64>() / count;
        let avg_y = next.map(|k| samples[k]).sum::<f64>() / count;

        let (a_x, a_y) = (a as f64, samples[a]);
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let area = ((a_x - k as f64) * (avg_y - a_y) - (a_x - avg_x) * (samples[k] - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(samples[max_idx]);
        a = max_idx;
    }

    sampled.push(samples[n - 1]);
    sampled
}
