//! Unit tests for Location and Position

use core_types::{Location, Position};

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_location_creation() {
        let loc = Location::new(10, 5, 12, 1);

        assert_eq!(loc.start.line, 10);
        assert_eq!(loc.start.column, 5);
        assert_eq!(loc.end.line, 12);
        assert_eq!(loc.end.column, 1);
    }

    #[test]
    fn test_location_at_single_position() {
        let loc = Location::at(Position::new(3, 4));
        assert_eq!(loc.start, loc.end);
        assert_eq!(loc.to_string(), "(3:4):(3:4)");
    }

    #[test]
    fn test_location_merge_spans_both() {
        let first = Location::new(1, 1, 1, 3);
        let last = Location::new(1, 7, 1, 9);

        let merged = Location::merge(first, last);
        assert_eq!(merged.start, first.start);
        assert_eq!(merged.end, last.end);
    }

    #[test]
    fn test_location_merge_does_not_touch_inputs() {
        let first = Location::new(1, 1, 1, 3);
        let last = Location::new(2, 1, 2, 3);
        let _ = Location::merge(first, last);

        assert_eq!(first, Location::new(1, 1, 1, 3));
        assert_eq!(last, Location::new(2, 1, 2, 3));
    }

    #[test]
    fn test_location_extended_to() {
        let loc = Location::new(1, 1, 1, 1).extended_to(Position::new(1, 8));
        assert_eq!(loc, Location::new(1, 1, 1, 8));
    }

    #[test]
    fn test_location_copy_and_equality() {
        let a = Location::new(42, 7, 42, 9);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Location::new(42, 7, 42, 10));
    }

    #[test]
    fn test_location_debug() {
        let debug_str = format!("{:?}", Location::new(1, 2, 3, 4));

        assert!(debug_str.contains("start"));
        assert!(debug_str.contains("end"));
        assert!(debug_str.contains("line"));
        assert!(debug_str.contains("column"));
    }

    #[test]
    fn test_location_large_values() {
        let loc = Location::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(loc.end.line, u32::MAX);
    }
}
