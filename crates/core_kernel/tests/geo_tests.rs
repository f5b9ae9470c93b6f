//! Tests for geographic coordinates

use core_kernel::Coordinates;

mod coordinates_tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let point = Coordinates::new(77.8945, 21.9078).unwrap();
        assert_eq!(point.longitude(), 77.8945);
        assert_eq!(point.latitude(), 21.9078);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Coordinates::new(181.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -91.0).is_err());
        assert!(Coordinates::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_serializes_as_pair() {
        let point = Coordinates::new(91.3456, 23.789).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[91.3456,23.789]");

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
