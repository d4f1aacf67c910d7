pub const COUNTER_DIGITS: usize = 7;

/// Left-pads the display value to seven cells with zeroes. Also applied to
/// the literal `ERROR` fallback, which therefore shows as `00ERROR` just
/// like an odometer that broke down.
pub fn pad_counter(value: &str) -> String {
    format!("{value:0>width$}", width = COUNTER_DIGITS)
}

pub fn format_count(count: u64) -> String {
    pad_counter(&count.to_string())
}

pub const PORTFOLIO_OFFLINE_TEXT: &str = "VISITORS: [OFFLINE]";

/// Counter line for the portfolio page, which shows cumulative and same-day
/// visits instead of the digit boxes.
pub fn portfolio_counter_line(total: u64, today: u64) -> String {
    format!("TOTAL: {total:0>6} | TODAY: {today:0>4}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_are_zero_padded_to_seven_digits() {
        assert_eq!(format_count(0), "0000000");
        assert_eq!(format_count(123), "0000123");
        assert_eq!(format_count(1234567), "1234567");
    }

    #[test]
    fn overflowing_counts_are_not_truncated() {
        assert_eq!(format_count(123456789), "123456789");
    }

    #[test]
    fn error_text_gets_the_same_padding() {
        assert_eq!(pad_counter("ERROR"), "00ERROR");
    }

    #[test]
    fn portfolio_line_pads_total_and_today_differently() {
        assert_eq!(portfolio_counter_line(4410, 23), "TOTAL: 004410 | TODAY: 0023");
        assert_eq!(portfolio_counter_line(0, 0), "TOTAL: 000000 | TODAY: 0000");
        assert_eq!(
            portfolio_counter_line(1234567, 12345),
            "TOTAL: 1234567 | TODAY: 12345"
        );
    }
}
