mod tests {
    use tally_control::command::{MAX_COMMAND_LEN, ParseError};
    use tally_control::{RenderCommand, Rgb};

    #[test]
    fn test_parse_well_formed() {
        let command = RenderCommand::parse(b"O255/0/0 S0/0/255 0x01 5").unwrap();
        assert_eq!(command.operator, Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(command.standby, Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(command.pattern, 1);
        assert_eq!(command.duration_ms, 5);
    }

    #[test]
    fn test_parse_multi_digit_hex_pattern() {
        let command = RenderCommand::parse(b"O0/128/64 S10/20/30 0x1A 2500").unwrap();
        assert_eq!(command.operator, Rgb { r: 0, g: 128, b: 64 });
        assert_eq!(command.standby, Rgb { r: 10, g: 20, b: 30 });
        assert_eq!(command.pattern, 0x1A);
        assert_eq!(command.duration_ms, 2500);
    }

    #[test]
    fn test_parse_tolerates_trailing_nul() {
        let command = RenderCommand::parse(b"O1/2/3 S4/5/6 0x02 100\0").unwrap();
        assert_eq!(command.operator, Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(command.duration_ms, 100);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 S0/0/255 0x01"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 0x01 5"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0 S0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert_eq!(
            RenderCommand::parse(b"Ored/0/0 S0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 S0/0/255 0x01 soon"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 S0/0/255 0xZZ 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_channel() {
        assert_eq!(
            RenderCommand::parse(b"O256/0/0 S0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_color_tags() {
        assert_eq!(
            RenderCommand::parse(b"X255/0/0 S0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 O0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_missing_hex_prefix() {
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 S0/0/255 01 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert_eq!(
            RenderCommand::parse(b"O255/0/0 S0/0/255 0x01 5 extra"),
            Err(ParseError::Malformed)
        );
        assert_eq!(
            RenderCommand::parse(b"O255/0/0/9 S0/0/255 0x01 5"),
            Err(ParseError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_oversized() {
        assert_eq!(RenderCommand::parse(b""), Err(ParseError::Malformed));
        let oversized = vec![b'O'; MAX_COMMAND_LEN + 1];
        assert_eq!(
            RenderCommand::parse(&oversized),
            Err(ParseError::Malformed)
        );
    }
}
