mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_hexagon_lights::color::{BLACK, Rgb, color};
    use myrtio_hexagon_lights::geometry::{CornerLocation, SideLocation};
    use myrtio_hexagon_lights::segment::PanelSegment;
    use myrtio_hexagon_lights::strip::LedStrip;
    use myrtio_hexagon_lights::{Error, MemoryDriver, PixelDriver};

    const RED: Rgb = color(255, 0, 0);
    const BLUE: Rgb = color(0, 0, 255);
    const NOW: Instant = Instant::from_millis(0);
    const NO_DELAY: Duration = Duration::from_millis(0);

    type Strip = LedStrip<MemoryDriver<16>, 16>;

    fn strip(count: u16) -> Strip {
        LedStrip::new(MemoryDriver::new(count), count).unwrap()
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    /// Bottom side of a point-up panel wound clockwise, 3 LEDs
    fn bottom_segment() -> PanelSegment {
        PanelSegment::new(SideLocation::Bottom, 0, 2, SideLocation::Left, SideLocation::Right)
    }

    #[test]
    fn test_immediate_set_replaces_color() {
        let mut strip = strip(4);
        strip.set_color(1, RED, NO_DELAY, NOW).unwrap();
        strip.set_color(1, BLUE, NO_DELAY, NOW).unwrap();

        assert_eq!(strip.color(1), Ok(BLUE));
        assert_eq!(strip.led(1).unwrap().pending(), None);
        assert_eq!(strip.pending_count(), 0);
        assert_eq!(strip.driver().pixel_color(1), BLUE);
    }

    #[test]
    fn test_second_delayed_change_supersedes_first() {
        let mut strip = strip(4);
        strip.set_color(0, RED, ms(100), NOW).unwrap();
        strip.set_color(0, BLUE, ms(200), NOW).unwrap();
        assert_eq!(strip.pending_count(), 1);

        assert_eq!(strip.apply_due(at(150)), 0);
        assert_eq!(strip.color(0), Ok(BLACK));

        assert_eq!(strip.apply_due(at(201)), 1);
        assert_eq!(strip.color(0), Ok(BLUE));
        assert_eq!(strip.pending_count(), 0);
    }

    #[test]
    fn test_immediate_set_cancels_pending_change() {
        let mut strip = strip(4);
        strip.set_color(2, RED, ms(50), NOW).unwrap();
        strip.set_color(2, BLUE, NO_DELAY, NOW).unwrap();

        assert_eq!(strip.pending_count(), 0);
        assert_eq!(strip.apply_due(at(1000)), 0);
        assert_eq!(strip.color(2), Ok(BLUE));
    }

    #[test]
    fn test_delayed_changes_apply_in_fire_order() {
        let mut strip = strip(4);
        strip.set_color(2, RED, ms(300), NOW).unwrap();
        strip.set_color(0, RED, ms(100), NOW).unwrap();
        strip.set_color(1, RED, ms(200), NOW).unwrap();

        assert_eq!(strip.apply_due(at(101)), 1);
        assert_eq!(strip.color(0), Ok(RED));
        assert_eq!(strip.color(1), Ok(BLACK));

        assert_eq!(strip.apply_due(at(301)), 2);
        assert_eq!(strip.color(2), Ok(RED));
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let mut strip = strip(4);
        let expected = Err(Error::IndexOutOfBounds { index: 4, len: 4 });
        assert_eq!(strip.color(4), expected);
        assert_eq!(
            strip.set_color(4, RED, NO_DELAY, NOW),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(strip.reset(9), Err(Error::IndexOutOfBounds { index: 9, len: 4 }));
    }

    #[test]
    fn test_strip_larger_than_capacity_is_rejected() {
        let result: Result<Strip, Error> = LedStrip::new(MemoryDriver::new(16), 17);
        assert!(matches!(result, Err(Error::InvalidLedCount { count: 17, max: 16 })));

        let result: Result<Strip, Error> = LedStrip::new(MemoryDriver::new(8), 10);
        assert!(matches!(result, Err(Error::InvalidLedCount { count: 10, max: 8 })));
    }

    #[test]
    fn test_flush_only_when_changed() {
        let mut strip = strip(4);
        assert!(strip.flush());
        assert!(!strip.flush());
        assert_eq!(strip.driver().flush_count(), 1);

        strip.set_color(0, RED, NO_DELAY, NOW).unwrap();
        strip.set_brightness(128);
        assert!(strip.is_changed());
        assert!(strip.flush());
        assert_eq!(strip.driver().frame()[0], color(128, 0, 0));
        assert!(!strip.is_changed());
    }

    #[test]
    fn test_clear_pending_keeps_current_colors() {
        let mut strip = strip(4);
        strip.set_color(0, RED, NO_DELAY, NOW).unwrap();
        strip.set_color(0, BLUE, ms(10), NOW).unwrap();
        strip.clear_pending();

        assert_eq!(strip.apply_due(at(100)), 0);
        assert_eq!(strip.color(0), Ok(RED));
        assert_eq!(strip.led(0).unwrap().pending(), None);
    }

    #[test]
    fn test_fill_zero_changes_nothing() {
        let mut strip = strip(9);
        let full = bottom_segment()
            .fill(&mut strip, 0.0, RED, CornerLocation::RightBottom, ms(100), NOW)
            .unwrap();

        assert!(!full);
        assert!(strip.leds().iter().all(|led| led.color() == BLACK));
        assert_eq!(strip.pending_count(), 0);
    }

    #[test]
    fn test_fill_one_changes_whole_segment() {
        let mut strip = strip(9);
        let full = bottom_segment()
            .fill(&mut strip, 1.0, RED, CornerLocation::RightBottom, NO_DELAY, NOW)
            .unwrap();

        assert!(full);
        for index in 0..3 {
            assert_eq!(strip.color(index), Ok(RED));
        }
        assert_eq!(strip.color(3), Ok(BLACK));
    }

    #[test]
    fn test_fill_direction_follows_percent_sign() {
        let mut strip = strip(9);
        let segment = bottom_segment();

        // Away from the corner: starts at the first pixel
        let full = segment
            .fill(&mut strip, 0.34, RED, CornerLocation::RightBottom, NO_DELAY, NOW)
            .unwrap();
        assert!(!full);
        assert_eq!(strip.color(0), Ok(RED));
        assert_eq!(strip.color(1), Ok(BLACK));
        assert_eq!(strip.color(2), Ok(BLACK));

        // Toward the corner: starts at the far end
        segment
            .fill(&mut strip, -0.34, BLUE, CornerLocation::RightBottom, NO_DELAY, NOW)
            .unwrap();
        assert_eq!(strip.color(2), Ok(BLUE));
        assert_eq!(strip.color(1), Ok(BLACK));
    }

    #[test]
    fn test_fill_clamps_percent_and_sweeps_over_duration() {
        let mut strip = strip(9);
        let full = bottom_segment()
            .fill(&mut strip, 7.5, RED, CornerLocation::RightBottom, ms(300), NOW)
            .unwrap();
        assert!(full);

        // 100 ms between LEDs, the first one right away
        assert_eq!(strip.color(0), Ok(RED));
        assert_eq!(strip.pending_count(), 2);
        strip.apply_due(at(101));
        assert_eq!(strip.color(1), Ok(RED));
        assert_eq!(strip.color(2), Ok(BLACK));
        strip.apply_due(at(201));
        assert_eq!(strip.color(2), Ok(RED));
    }

    #[test]
    fn test_fill_rounds_partial_count() {
        let mut strip = strip(9);
        let full = bottom_segment()
            .fill(&mut strip, 0.5, RED, CornerLocation::RightBottom, NO_DELAY, NOW)
            .unwrap();

        assert!(!full);
        assert_eq!(strip.color(0), Ok(RED));
        assert_eq!(strip.color(1), Ok(RED));
        assert_eq!(strip.color(2), Ok(BLACK));
    }
}
