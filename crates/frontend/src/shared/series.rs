//! Pairing of label sequences with numeric series.
//!
//! Backend series are consumed positionally against their label list.
//! Lengths are not trusted: a short series is padded with zeros, a long
//! one is cut at the label count.

/// Returns `values` resized to exactly `len` entries, padding with 0.0.
pub fn align_values(len: usize, values: &[f64]) -> Vec<f64> {
    (0..len)
        .map(|i| values.get(i).copied().unwrap_or(0.0))
        .collect()
}

/// Pairs every label with its value, one pair per label.
pub fn align_series(labels: &[String], values: &[f64]) -> Vec<(String, f64)> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), values.get(i).copied().unwrap_or(0.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn matching_lengths_pair_one_to_one() {
        let pairs = align_series(&labels(&["1", "2", "3"]), &[10.0, 20.0, 30.0]);
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), 10.0),
                ("2".to_string(), 20.0),
                ("3".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn short_series_pads_with_zero() {
        let pairs = align_series(&labels(&["a", "b", "c"]), &[5.0]);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].1, 0.0);
        assert_eq!(pairs[2].1, 0.0);

        assert_eq!(align_values(4, &[1.0, 2.0]), vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn long_series_is_truncated_to_the_labels() {
        let pairs = align_series(&labels(&["a"]), &[5.0, 6.0, 7.0]);
        assert_eq!(pairs, vec![("a".to_string(), 5.0)]);
        assert_eq!(align_values(0, &[1.0, 2.0]), Vec::<f64>::new());
    }
}
