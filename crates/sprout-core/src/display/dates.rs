//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that formats it for people rather than machines.
///
/// # Format
///
/// `Www, Mmm D, YYYY`, e.g. `Fri, Mar 1, 2024`. The day is not zero-padded.
pub struct HumanDate<'a>(pub &'a Date);

impl<'a> fmt::Display for HumanDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_human_date_format() {
        assert_eq!(HumanDate(&date(2024, 3, 1)).to_string(), "Fri, Mar 1, 2024");
        assert_eq!(HumanDate(&date(2024, 12, 25)).to_string(), "Wed, Dec 25, 2024");
    }
}
