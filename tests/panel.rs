mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_hexagon_lights::color::{BLACK, Rgb, color, rainbow_sample};
    use myrtio_hexagon_lights::effect::{FadeStep, PanelAction, SpinStep};
    use myrtio_hexagon_lights::geometry::{CornerLocation, SideLocation, WindDirection};
    use myrtio_hexagon_lights::{Error, MemoryDriver, PixelDriver, TriPanel, TriPanelConfig};

    const RED: Rgb = color(255, 0, 0);
    const NO_DELAY: Duration = Duration::from_millis(0);

    type Panel = TriPanel<MemoryDriver<16>, 16>;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    /// Point-up panel at the left top, strip starting at its right bottom corner
    fn left_top_config(led_count: u16) -> TriPanelConfig {
        TriPanelConfig::new(
            5,
            led_count,
            CornerLocation::LeftTop,
            WindDirection::Clockwise,
            CornerLocation::RightBottom,
        )
    }

    fn panel(led_count: u16) -> Panel {
        let config = left_top_config(led_count);
        TriPanel::new(config, MemoryDriver::new(led_count)).unwrap()
    }

    fn distinct_colors() -> [Rgb; 9] {
        core::array::from_fn(|i| color(10 * i as u8 + 1, 0, 0))
    }

    #[test]
    fn test_segments_follow_winding() {
        let panel = panel(9);
        let [first, second, third] = panel.segments();

        assert_eq!(first.side(), SideLocation::Bottom);
        assert_eq!((first.min_index(), first.max_index()), (0, 2));
        assert_eq!(second.side(), SideLocation::Left);
        assert_eq!((second.min_index(), second.max_index()), (3, 5));
        assert_eq!(third.side(), SideLocation::Right);
        assert_eq!((third.min_index(), third.max_index()), (6, 8));

        assert_eq!(first.next_side(), SideLocation::Left);
        assert_eq!(first.prev_side(), SideLocation::Right);
        assert_eq!(third.next_side(), SideLocation::Bottom);
        assert_eq!(third.prev_side(), SideLocation::Left);

        assert_eq!(panel.corner_at_center(), CornerLocation::RightBottom);
        assert_eq!(panel.outer_side(), SideLocation::Left);
        assert_eq!(panel.segment(SideLocation::Top), None);
        assert_eq!(panel.segment_of(4).map(|s| s.side()), Some(SideLocation::Left));
    }

    #[test]
    fn test_segments_cover_strip_once() {
        for count in [3u16, 4, 5, 9, 16] {
            let panel = panel(count);
            let mut expected = 0;
            for segment in panel.segments() {
                assert!(!segment.is_empty());
                assert_eq!(segment.min_index(), expected);
                expected = segment.max_index() + 1;
            }
            assert_eq!(expected, count);
        }
    }

    #[test]
    fn test_invalid_configurations() {
        let too_short: Result<Panel, Error> =
            TriPanel::new(left_top_config(2), MemoryDriver::new(2));
        assert!(matches!(too_short, Err(Error::InvalidLedCount { count: 2, .. })));

        let too_long: Result<Panel, Error> =
            TriPanel::new(left_top_config(17), MemoryDriver::new(17));
        assert!(matches!(too_long, Err(Error::InvalidLedCount { count: 17, max: 16 })));

        // Point-down panel has no bottom side to start on
        let config = TriPanelConfig::new(
            1,
            9,
            CornerLocation::MiddleTop,
            WindDirection::CounterClockwise,
            CornerLocation::LeftBottom,
        );
        let wrong_start: Result<Panel, Error> = TriPanel::new(config, MemoryDriver::new(9));
        assert!(matches!(
            wrong_start,
            Err(Error::InvalidStartCorner {
                location: CornerLocation::MiddleTop,
                start: CornerLocation::LeftBottom,
            })
        ));
    }

    #[test]
    fn test_pixel_access_out_of_range() {
        let mut panel = panel(9);
        assert_eq!(panel.pixel_color(9), Err(Error::IndexOutOfBounds { index: 9, len: 9 }));
        assert!(panel.set_pixel_color(12, RED, NO_DELAY, at(0)).is_err());
        assert!(panel.reset_pixel_color(9).is_err());
        assert_eq!(panel.pixel_color(8), Ok(BLACK));
    }

    #[test]
    fn test_fill_from_center_corner_sweeps_then_caps() {
        let mut panel = panel(9);
        panel.fill_from_corner(1.0, RED, ms(300), at(0)).unwrap();

        // Both sides start at the center corner
        assert_eq!(panel.pixel_color(0), Ok(RED));
        assert_eq!(panel.pixel_color(8), Ok(RED));
        assert_eq!(panel.pixel_color(1), Ok(BLACK));
        assert_eq!(panel.pixel_color(4), Ok(BLACK));

        panel.show(at(150));
        assert_eq!(panel.pixel_color(1), Ok(RED));
        assert_eq!(panel.pixel_color(7), Ok(RED));
        assert_eq!(panel.pixel_color(2), Ok(BLACK));

        panel.show(at(301));
        assert!(panel.colors().iter().all(|&c| c == RED));
        assert!(panel.is_idle());
    }

    #[test]
    fn test_partial_fill_leaves_cap_dark() {
        let mut panel = panel(9);
        panel.fill_from_corner(0.5, RED, NO_DELAY, at(0)).unwrap();
        panel.show(at(1));

        let colors = panel.colors();
        assert_eq!(&colors[0..3], &[RED, RED, BLACK]);
        assert_eq!(&colors[3..6], &[BLACK, BLACK, BLACK]);
        assert_eq!(&colors[6..9], &[BLACK, RED, RED]);
    }

    #[test]
    fn test_fill_to_corner_lights_cap_first() {
        let mut panel = panel(9);
        panel.fill_to_corner(0.34, RED, NO_DELAY, at(0)).unwrap();

        let colors = panel.colors();
        assert_eq!(&colors[0..3], &[BLACK, BLACK, RED]);
        assert_eq!(&colors[3..6], &[RED, RED, RED]);
        assert_eq!(&colors[6..9], &[RED, BLACK, BLACK]);
    }

    #[test]
    fn test_fill_from_foreign_corner_is_rejected() {
        let mut panel = panel(9);
        let result = panel.fill_from(CornerLocation::LeftTop, 1.0, RED, NO_DELAY, at(0));
        assert_eq!(result, Err(Error::CornerNotOnPanel { corner: CornerLocation::LeftTop }));
        assert!(panel.colors().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_set_colors_resamples() {
        let mut panel = panel(9);
        let a = color(1, 0, 0);
        let b = color(0, 1, 0);
        let c = color(0, 0, 1);
        panel.set_colors(&[a, b, c], NO_DELAY, at(0)).unwrap();
        assert_eq!(panel.colors().as_slice(), &[a, a, a, b, b, b, c, c, c]);
    }

    #[test]
    fn test_spin_one_loop_is_identity() {
        let mut panel = panel(9);
        let painted = distinct_colors();
        panel.set_colors(&painted, NO_DELAY, at(0)).unwrap();
        panel.color_spin(1.0, 255, at(0)).unwrap();

        // First step fires on the next tick
        panel.show(at(1));
        let mut rotated = painted;
        rotated.rotate_right(1);
        assert_eq!(panel.colors().as_slice(), &rotated);

        panel.show(at(10_000));
        assert_eq!(panel.colors().as_slice(), &painted);
        assert!(panel.is_idle());
    }

    #[test]
    fn test_spin_zero_loops_runs_forever() {
        let mut panel = panel(9);
        panel.set_colors(&distinct_colors(), NO_DELAY, at(0)).unwrap();
        panel.color_spin(0.0, 255, at(0)).unwrap();

        panel.show(at(10_000));
        let next = panel.actions().next().unwrap();
        assert!(next.fire_at >= at(10_000));
        assert!(matches!(
            next.action,
            PanelAction::Spin(SpinStep { remaining: None, .. })
        ));

        panel.clear_actions();
        assert!(panel.is_idle());
    }

    #[test]
    fn test_zero_spacing_spin_advances_one_step_per_ms() {
        let mut panel = panel(9);
        let painted = distinct_colors();
        panel.set_colors(&painted, NO_DELAY, at(0)).unwrap();
        let step = SpinStep {
            remaining: None,
            step: NO_DELAY,
            direction: WindDirection::Clockwise,
        };
        panel.schedule(NO_DELAY, PanelAction::Spin(step), at(0)).unwrap();

        // Steps fire at 0..=9 ms, ten rotations of a nine pixel strip
        panel.show(at(10));
        let mut rotated = painted;
        rotated.rotate_right(1);
        assert_eq!(panel.colors().as_slice(), &rotated);
        assert_eq!(panel.actions().next().unwrap().fire_at, at(10));
    }

    #[test]
    fn test_spin_plan() {
        let step = SpinStep::plan(9, 1.0, 255, WindDirection::Clockwise).unwrap();
        assert_eq!(step.remaining, Some(9));
        assert_eq!(step.step, ms(56));

        let step = SpinStep::plan(9, 0.5, 255, WindDirection::Clockwise).unwrap();
        assert_eq!(step.remaining, Some(5));

        assert_eq!(SpinStep::plan(9, 0.0, 255, WindDirection::Clockwise).unwrap().remaining, None);
        assert_eq!(SpinStep::plan(9, -1.0, 255, WindDirection::Clockwise), None);

        let step = SpinStep::plan(600, 1.0, 255, WindDirection::Clockwise).unwrap();
        assert_eq!(step.step, ms(1));
    }

    #[test]
    fn test_fade_plan_spacing() {
        let step = FadeStep::plan(0, 4, ms(100), false).unwrap();
        assert_eq!(step.level, 1);
        assert_eq!(step.step, ms(25));
        assert!(!step.is_last());

        let step = FadeStep::plan(10, 0, ms(30), true).unwrap();
        assert_eq!(step.level, 9);
        assert_eq!(step.step, ms(3));

        assert_eq!(FadeStep::plan(5, 5, ms(30), true), None);
    }

    #[test]
    fn test_fade_in_steps_one_level_at_a_time() {
        let mut panel = panel(9);
        panel.set_brightness(0);
        panel.fade_in(4, false, ms(100), at(0)).unwrap();

        panel.show(at(26));
        assert_eq!(panel.brightness(), 1);
        panel.show(at(51));
        assert_eq!(panel.brightness(), 2);
        panel.show(at(100));
        assert_eq!(panel.brightness(), 3);
        panel.show(at(101));
        assert_eq!(panel.brightness(), 4);
        assert!(panel.is_idle());

        // Already bright enough
        panel.fade_in(4, false, ms(100), at(200)).unwrap();
        assert!(panel.is_idle());
    }

    #[test]
    fn test_breathe_cycles_until_cleared() {
        let mut panel = panel(9);
        panel.breathe(4, ms(100), Some(RED), at(0)).unwrap();
        assert!(panel.colors().iter().all(|&c| c == RED));
        assert_eq!(panel.brightness(), 0);

        panel.show(at(101));
        assert_eq!(panel.brightness(), 4);

        // Holds until the fade-out starts at 150 ms
        panel.show(at(150));
        assert_eq!(panel.brightness(), 4);
        panel.show(at(176));
        assert_eq!(panel.brightness(), 3);

        // Next cycle starts at 250 ms from dark
        panel.show(at(251));
        assert_eq!(panel.brightness(), 0);
        panel.show(at(276));
        assert_eq!(panel.brightness(), 1);

        panel.clear_actions();
        assert!(panel.is_idle());
        panel.show(at(1000));
        assert_eq!(panel.brightness(), 1);
    }

    #[test]
    fn test_rainbow_paints_gradient() {
        let mut panel = panel(9);
        panel.rainbow(1.0, 255, at(0)).unwrap();

        for index in 0..9u16 {
            assert_eq!(panel.pixel_color(index), Ok(rainbow_sample(usize::from(index), 9)));
        }
        assert!(!panel.is_idle());
    }

    #[test]
    fn test_rainbow_timed_without_duration_only_paints() {
        let mut panel = panel(9);
        panel.rainbow_timed(NO_DELAY, 255, at(0)).unwrap();
        assert_eq!(panel.pixel_color(0), Ok(rainbow_sample(0, 9)));
        assert!(panel.is_idle());
    }

    #[test]
    fn test_scheduled_actions_fire_in_order() {
        let mut panel = panel(9);
        panel.schedule(ms(20), PanelAction::SetBrightness(10), at(0)).unwrap();
        panel.schedule(ms(10), PanelAction::SetColor(RED), at(0)).unwrap();
        panel.schedule(ms(20), PanelAction::SetBrightness(20), at(0)).unwrap();

        panel.show(at(11));
        assert_eq!(panel.pixel_color(3), Ok(RED));
        assert_eq!(panel.brightness(), 255);

        panel.show(at(21));
        assert_eq!(panel.brightness(), 20);
    }

    #[test]
    fn test_show_flushes_only_changes() {
        let mut panel = panel(9);
        panel.begin(50);
        assert!(panel.driver().is_initialized());
        assert_eq!(panel.driver().flush_count(), 1);
        assert_eq!(panel.driver().brightness(), 50);

        assert!(!panel.show(at(1)));
        panel.set_pixel_color(0, RED, NO_DELAY, at(1)).unwrap();
        assert!(panel.show(at(2)));
        assert_eq!(panel.driver().pixels()[0], RED);
        assert_eq!(panel.driver().flush_count(), 2);
    }
}
