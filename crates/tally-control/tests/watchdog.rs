mod tests {
    use tally_control::watchdog::DISCONNECT_TIMEOUT_MICROS;
    use tally_control::{ConnectionState, Micros, Watchdog};

    #[test]
    fn test_elapsed_across_wraparound() {
        let before_wrap = Micros::new(u32::MAX - 4);
        let after_wrap = Micros::new(5);
        assert_eq!(after_wrap.elapsed_since(before_wrap), 10);
    }

    #[test]
    fn test_elapsed_without_wraparound() {
        assert_eq!(Micros::new(5000).elapsed_since(Micros::new(2000)), 3000);
        assert_eq!(Micros::new(2000).elapsed_since(Micros::new(2000)), 0);
    }

    #[test]
    fn test_timeout_boundary() {
        let mut watchdog = Watchdog::new(Micros::new(0));

        // Exactly the timeout still counts as connected.
        assert_eq!(watchdog.evaluate(Micros::new(DISCONNECT_TIMEOUT_MICROS)), None);
        assert_eq!(watchdog.state(), ConnectionState::Connected);

        // One microsecond past flips the state.
        assert_eq!(
            watchdog.evaluate(Micros::new(DISCONNECT_TIMEOUT_MICROS + 1)),
            Some(ConnectionState::Disconnected)
        );
        assert_eq!(watchdog.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_transition_reported_only_once() {
        let mut watchdog = Watchdog::new(Micros::new(0));
        assert_eq!(
            watchdog.evaluate(Micros::new(4_000_000)),
            Some(ConnectionState::Disconnected)
        );
        // Stable state produces no further transitions.
        assert_eq!(watchdog.evaluate(Micros::new(5_000_000)), None);
        assert_eq!(watchdog.evaluate(Micros::new(6_000_000)), None);
    }

    #[test]
    fn test_reconnect_on_packet() {
        let mut watchdog = Watchdog::new(Micros::new(0));
        watchdog.evaluate(Micros::new(4_000_000));
        assert_eq!(watchdog.state(), ConnectionState::Disconnected);

        watchdog.packet_received(Micros::new(4_500_000));
        assert_eq!(
            watchdog.evaluate(Micros::new(4_500_100)),
            Some(ConnectionState::Connected)
        );
        assert_eq!(watchdog.state(), ConnectionState::Connected);
    }

    #[test]
    fn test_stays_connected_across_clock_wrap() {
        // Last packet just before the counter wraps, evaluation just after.
        let mut watchdog = Watchdog::new(Micros::new(0));
        watchdog.packet_received(Micros::new(u32::MAX - 1_000_000));
        assert_eq!(watchdog.evaluate(Micros::new(500_000)), None);
        assert_eq!(watchdog.state(), ConnectionState::Connected);
    }
}
