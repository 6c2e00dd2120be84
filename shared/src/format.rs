use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarningsClass {
    Positive,
    Negative,
    Neutral,
}

impl EarningsClass {
    pub fn classify(earnings: f64) -> Self {
        if earnings > 0.0 {
            Self::Positive
        } else if earnings < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// CSS class name used on earnings cells.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// `+$X.XX` for non-negative earnings, `-$X.XX` otherwise.
pub fn format_earnings(earnings: f64) -> String {
    // abs() in both arms so -0.0 does not print as "+$-0.00".
    if earnings >= 0.0 {
        format!("+${:.2}", earnings.abs())
    } else {
        format!("-${:.2}", earnings.abs())
    }
}

pub fn format_record(wins: u32, losses: u32) -> String {
    format!("{wins}-{losses}")
}

/// Long-form en-US header text, e.g. `Last updated: March 15, 2024`.
pub fn format_last_updated(date: NaiveDate) -> String {
    format!("Last updated: {}", date.format("%B %-d, %Y"))
}
