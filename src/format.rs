//! Pattern formatting of Myanmar dates.
//!
//! | Token   | Output                         |
//! |---------|--------------------------------|
//! | `&yyyy` | Myanmar year, four digits      |
//! | `&y`    | Myanmar year                   |
//! | `&M`    | month name                     |
//! | `&P`    | moon phase name                |
//! | `&ff`   | fortnight day, two digits      |
//! | `&f`    | fortnight day                  |
//! | `&d`    | day of the month               |
//! | `&W`    | weekday name                   |
//!
//! Tokens are matched longest first; any other text is copied unchanged.

use crate::MyanmarDate;

const TOKENS: [&str; 8] = ["&yyyy", "&ff", "&y", "&M", "&P", "&f", "&d", "&W"];

fn expand(token: &str, date: &MyanmarDate) -> String {
    match token {
        "&yyyy" => format!("{:04}", date.myanmar_year),
        "&y" => date.myanmar_year.to_string(),
        "&M" => date.month.to_string(),
        "&P" => date.moon_phase.to_string(),
        "&ff" => format!("{:02}", date.fortnight_day),
        "&f" => date.fortnight_day.to_string(),
        "&d" => date.day_of_month.to_string(),
        "&W" => date.weekday.to_string(),
        _ => token.to_owned(),
    }
}

/// Renders `date` through `pattern`.
pub fn format_date(date: &MyanmarDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match TOKENS.iter().find(|token| rest.starts_with(*token)) {
            Some(token) => {
                out.push_str(&expand(token, date));
                rest = &rest[token.len()..];
            },
            None => {
                out.push('&');
                rest = &rest[1..];
            },
        }
    }
    out.push_str(rest);
    out
}

impl MyanmarDate {
    /// Renders this date through a `&`-token pattern; see [`format_date`].
    pub fn format(&self, pattern: &str) -> String {
        format_date(self, pattern)
    }
}
