mod tests {
    use tally_control::heartbeat::{self, HeartbeatSchedule};
    use tally_control::{ConnectionState, Micros};

    #[test]
    fn test_message_format() {
        assert_eq!(heartbeat::message("camera-1").as_str(), "tally-ho \"camera-1\"");
    }

    #[test]
    fn test_fires_once_per_window() {
        let mut schedule = HeartbeatSchedule::new(Micros::new(0));

        // Still inside the first window.
        assert!(!schedule.poll(Micros::new(500_000), ConnectionState::Connected));
        assert!(!schedule.poll(Micros::new(999_999), ConnectionState::Connected));

        // New window fires exactly once.
        assert!(schedule.poll(Micros::new(1_000_000), ConnectionState::Connected));
        assert!(!schedule.poll(Micros::new(1_200_000), ConnectionState::Connected));
        assert!(!schedule.poll(Micros::new(1_999_999), ConnectionState::Connected));
        assert!(schedule.poll(Micros::new(2_000_000), ConnectionState::Connected));
    }

    #[test]
    fn test_suppressed_while_disconnected() {
        let mut schedule = HeartbeatSchedule::new(Micros::new(0));
        assert!(!schedule.poll(Micros::new(1_100_000), ConnectionState::Disconnected));
        assert!(!schedule.poll(Micros::new(2_100_000), ConnectionState::Disconnected));
    }

    #[test]
    fn test_no_burst_after_reconnect() {
        let mut schedule = HeartbeatSchedule::new(Micros::new(0));
        // A window consumed while disconnected does not fire later.
        assert!(!schedule.poll(Micros::new(1_100_000), ConnectionState::Disconnected));
        assert!(!schedule.poll(Micros::new(1_200_000), ConnectionState::Connected));
        // The next window fires normally.
        assert!(schedule.poll(Micros::new(2_000_000), ConnectionState::Connected));
    }
}
