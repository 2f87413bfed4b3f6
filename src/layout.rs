//! Visible-row calculation for day cells.

/// Height of one rendered event row, in pixels.
pub const EVENT_HEIGHT_PX: f64 = 30.0;
/// Vertical space reserved for the "+N more" indicator.
pub const OVERFLOW_FOOTER_PX: f64 = 20.0;
/// Product cap: never show more than this many event rows in a cell,
/// regardless of available space.
pub const MAX_VISIBLE_EVENTS: usize = 4;

/// How many event rows fit in a cell of the given measured height, using
/// the default row and footer heights.
///
/// Pure: callers re-invoke whenever the measured height changes (resize,
/// reflow), not just once at mount.
pub fn visible_event_count(container_height_px: f64) -> usize {
    visible_event_count_with(container_height_px, EVENT_HEIGHT_PX, OVERFLOW_FOOTER_PX)
}

/// [`visible_event_count`] with explicit row and footer heights.
///
/// Returns `floor((container - footer) / row)` clamped to
/// `0..=MAX_VISIBLE_EVENTS`. A cell too short for even one row yields 0;
/// such a cell renders only the overflow indicator.
pub fn visible_event_count_with(
    container_height_px: f64,
    event_height_px: f64,
    footer_px: f64,
) -> usize {
    if event_height_px <= 0.0 {
        return 0;
    }
    let rows = ((container_height_px - footer_px) / event_height_px).floor();
    rows.clamp(0.0, MAX_VISIBLE_EVENTS as f64) as usize
}

/// How many events stay hidden behind the "+N more" indicator.
pub fn hidden_event_count(total_events: usize, visible: usize) -> usize {
    total_events.saturating_sub(visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_pixel_cell_shows_two_rows() {
        // floor((100 - 20) / 30) = 2, under the cap.
        assert_eq!(visible_event_count(100.0), 2);
    }

    #[test]
    fn test_tall_cells_are_capped_at_four_rows() {
        assert_eq!(visible_event_count(200.0), 4);
        assert_eq!(visible_event_count(1000.0), 4);
        assert_eq!(visible_event_count(10_000.0), 4);
    }

    #[test]
    fn test_short_cells_bottom_out_at_zero() {
        // floor((40 - 20) / 30) = 0: room for the indicator only.
        assert_eq!(visible_event_count(40.0), 0);
        // Shorter than the footer itself must not go negative.
        assert_eq!(visible_event_count(10.0), 0);
        assert_eq!(visible_event_count(0.0), 0);
    }

    #[test]
    fn test_count_stays_in_bounds_across_heights() {
        for height in 0..500 {
            let count = visible_event_count(height as f64);
            assert!(count <= MAX_VISIBLE_EVENTS, "height {} gave {}", height, count);
        }
    }

    #[test]
    fn test_explicit_row_and_footer_heights() {
        assert_eq!(visible_event_count_with(100.0, 20.0, 0.0), 4);
        assert_eq!(visible_event_count_with(100.0, 50.0, 10.0), 1);
        assert_eq!(visible_event_count_with(100.0, 0.0, 10.0), 0);
    }

    #[test]
    fn test_hidden_event_count() {
        assert_eq!(hidden_event_count(6, 4), 2);
        assert_eq!(hidden_event_count(3, 4), 0);
        assert_eq!(hidden_event_count(0, 0), 0);
    }
}
