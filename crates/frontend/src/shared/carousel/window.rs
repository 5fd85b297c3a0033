//! Page window arithmetic for the carousel.

/// Number of items that actually fit in the available width, never more
/// than the caller asked for.
///
/// A zero (or not yet measured) width yields 0, which is a valid
/// "nothing fits" state, not an error.
pub fn effective_items_per_view(
    viewport_width: f64,
    item_width: f64,
    gap: f64,
    requested_items_per_view: usize,
) -> usize {
    debug_assert!(item_width > 0.0, "item width must be positive");
    debug_assert!(gap >= 0.0, "gap cannot be negative");
    debug_assert!(requested_items_per_view >= 1, "at least one item must be requested");

    if viewport_width <= 0.0 {
        return 0;
    }
    let fits = (viewport_width / (item_width + gap)).floor() as usize;
    fits.min(requested_items_per_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_fits_nothing() {
        assert_eq!(effective_items_per_view(0.0, 252.0, 16.0, 4), 0);
    }

    #[test]
    fn test_clamped_to_requested() {
        // 2000 / 268 = 7.46 -> 7 fits, but only 4 were requested
        assert_eq!(effective_items_per_view(2000.0, 252.0, 16.0, 4), 4);
    }

    #[test]
    fn test_partial_fit() {
        // 1200 / 268 = 4.47 -> 4
        assert_eq!(effective_items_per_view(1200.0, 252.0, 16.0, 5), 4);
        // just below one slot
        assert_eq!(effective_items_per_view(267.9, 252.0, 16.0, 4), 0);
        // exactly one slot
        assert_eq!(effective_items_per_view(268.0, 252.0, 16.0, 4), 1);
    }

    #[test]
    fn test_monotonic_in_width() {
        let mut last = 0;
        for w in 0..3000 {
            let v = effective_items_per_view(w as f64, 252.0, 16.0, 6);
            assert!(v >= last, "shrunk from {} to {} at width {}", last, v, w);
            last = v;
        }
    }

    #[test]
    fn test_zero_gap() {
        assert_eq!(effective_items_per_view(504.0, 252.0, 0.0, 4), 2);
    }
}
