//! Number formatting for metric readouts.
//!
//! Counters hand out raw `f64` values; every readout on the site goes through
//! these helpers so whole numbers, decimals and compact figures look the same
//! everywhere.

/// Format a whole number with `,` thousands separators.
///
/// # Examples
/// ```
/// use morph_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(12_402), "12,402");
/// assert_eq!(format_thousands(1_200_000), "1,200,000");
/// assert_eq!(format_thousands(-1_500), "-1,500");
/// ```
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// Format with a fixed number of decimals.
///
/// # Examples
/// ```
/// use morph_types::formatting::format_fixed;
/// assert_eq!(format_fixed(12.5, 1), "12.5");
/// assert_eq!(format_fixed(0.01, 2), "0.01");
/// assert_eq!(format_fixed(3.0, 0), "3");
/// ```
pub fn format_fixed(n: f64, decimals: usize) -> String {
    format!("{:.prec$}", n, prec = decimals)
}

/// Format a counter value the way readouts show it: fixed decimals when the
/// metric has any, otherwise a rounded, thousands-separated integer.
///
/// # Examples
/// ```
/// use morph_types::formatting::format_counter;
/// assert_eq!(format_counter(1_199_999.6, 0), "1,200,000");
/// assert_eq!(format_counter(14.2, 1), "14.2");
/// ```
pub fn format_counter(n: f64, decimals: usize) -> String {
    if decimals > 0 {
        format_fixed(n, decimals)
    } else {
        format_thousands(n.round() as i64)
    }
}

/// Compact display with K/M suffix.
///
/// # Examples
/// ```
/// use morph_types::formatting::format_compact;
/// assert_eq!(format_compact(500.0), "500");
/// assert_eq!(format_compact(8_500.0), "8.5K");
/// assert_eq!(format_compact(1_200_000.0), "1.2M");
/// ```
pub fn format_compact(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Format a 0..=1 fraction as a CSS-ready percentage.
///
/// # Examples
/// ```
/// use morph_types::formatting::format_pct;
/// assert_eq!(format_pct(0.0), "0%");
/// assert_eq!(format_pct(0.5), "50%");
/// assert_eq!(format_pct(1.0 / 3.0), "33.3%");
/// ```
pub fn format_pct(fraction: f64) -> String {
    let pct = (fraction.clamp(0.0, 1.0) * 1000.0).round() / 10.0;
    if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// `earned/total XP` badge text.
pub fn format_xp(earned: u32, total: u32) -> String {
    format!("{}/{} XP", earned, total)
}
