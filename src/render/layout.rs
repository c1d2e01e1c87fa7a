/// Splits `total` pixels across panes by weight.
///
/// Every pane but the last gets `floor(total * ratio / sum)`; the last pane
/// takes the remainder so heights always add up to `total`. Invalid weights
/// count as zero, and an all-zero set falls back to equal weights.
#[must_use]
pub fn pane_heights(total: u32, ratios: &[f64]) -> Vec<u32> {
    if ratios.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<f64> = ratios
        .iter()
        .map(|ratio| {
            if ratio.is_finite() && *ratio > 0.0 {
                *ratio
            } else {
                0.0
            }
        })
        .collect();
    let weight_sum: f64 = weights.iter().sum();
    if !weight_sum.is_finite() || weight_sum <= 0.0 {
        weights.fill(1.0);
    }
    let weight_sum: f64 = weights.iter().sum();

    let mut heights = Vec::with_capacity(weights.len());
    let mut remaining = total;
    let last_index = weights.len() - 1;
    for (index, weight) in weights.iter().enumerate() {
        let height = if index == last_index {
            remaining
        } else {
            let share = (f64::from(total) * weight / weight_sum).floor();
            (share as u32).min(remaining)
        };
        remaining -= height;
        heights.push(height);
    }
    heights
}

#[cfg(test)]
mod tests {
    use super::pane_heights;

    #[test]
    fn last_pane_takes_remainder() {
        assert_eq!(pane_heights(600, &[3.0, 1.0]), vec![450, 150]);
        assert_eq!(pane_heights(100, &[1.0, 1.0, 1.0]), vec![33, 33, 34]);
    }

    #[test]
    fn degenerate_weights_fall_back_to_equal_split() {
        assert_eq!(pane_heights(300, &[0.0, f64::NAN]), vec![150, 150]);
        assert!(pane_heights(300, &[]).is_empty());
    }
}
