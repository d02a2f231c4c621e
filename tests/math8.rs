mod tests {
    use myrtio_hexagon_lights::color::color;
    use myrtio_hexagon_lights::math8::{scale8, scale_color};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale_color() {
        let orange = color(255, 128, 0);
        assert_eq!(scale_color(orange, 255), orange);
        assert_eq!(scale_color(orange, 128), color(128, 64, 0));
        assert_eq!(scale_color(orange, 0), color(0, 0, 0));
    }
}
