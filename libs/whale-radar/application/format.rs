//! Human-readable magnitudes for dashboard values

/// Summary volume: `$1.23B`, `$4.56M`, `$7.8K`, `$12`
pub fn format_volume(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Feed row value: `$4.56M`, `$7.8K`, `$12`
pub fn format_usd(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Exchange flow bar value: `$4.6M`, `$8K`, `$12`
pub fn format_flow(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Net flow with an explicit `+` for positive values
pub fn format_net_flow(net: f64) -> String {
    if net > 0.0 {
        format!("+{}", format_flow(net))
    } else if net < 0.0 {
        format!("-{}", format_flow(-net))
    } else {
        format_flow(0.0)
    }
}

/// Relative age: `12s ago`, `3m ago`, `2h ago`
pub fn format_age(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        format!("{}h ago", seconds / 3600)
    }
}

/// Integer with thousands separators: `10,099`
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_thresholds() {
        assert_eq!(format_volume(0.0), "$0");
        assert_eq!(format_volume(999.0), "$999");
        assert_eq!(format_volume(1_500.0), "$1.5K");
        assert_eq!(format_volume(2_340_000.0), "$2.34M");
        assert_eq!(format_volume(1_234_000_000.0), "$1.23B");
    }

    #[test]
    fn test_usd_thresholds() {
        assert_eq!(format_usd(320_000.0), "$320.0K");
        assert_eq!(format_usd(67_000_000.0), "$67.00M");
        assert_eq!(format_usd(0.4), "$0");
    }

    #[test]
    fn test_flow_and_net() {
        assert_eq!(format_flow(500.0), "$500");
        assert_eq!(format_flow(12_000.0), "$12K");
        assert_eq!(format_flow(3_260_000.0), "$3.3M");
        assert_eq!(format_net_flow(300.0), "+$300");
        assert_eq!(format_net_flow(-12_000.0), "-$12K");
        assert_eq!(format_net_flow(0.0), "$0");
    }

    #[test]
    fn test_age() {
        assert_eq!(format_age(0), "0s ago");
        assert_eq!(format_age(59), "59s ago");
        assert_eq!(format_age(60), "1m ago");
        assert_eq!(format_age(3_599), "59m ago");
        assert_eq!(format_age(7_200), "2h ago");
        assert_eq!(format_age(-5), "0s ago");
    }

    #[test]
    fn test_amount_separators() {
        assert_eq!(format_amount(100), "100");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(10_099), "10,099");
        assert_eq!(format_amount(1_234_567), "1,234,567");
    }
}
