use regex::Regex;
use std::sync::OnceLock;

const YEARS_PATTERN: &str = r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?|y)\b";

static YEARS_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn years_regex() -> Option<&'static Regex> {
    YEARS_REGEX
        .get_or_init(|| Regex::new(YEARS_PATTERN).ok())
        .as_ref()
}

/// Best-effort total years of experience from free text.
///
/// Every `<N>y`, `<N> yr(s)`, `<N> year(s)`, or `<N>+ years` figure is summed, so
/// "8y Python engineer, 2y law enforcement support" yields 10. Text without any such
/// figure yields `None`.
pub fn years_of_experience(text: &str) -> Option<f64> {
    let mut found = false;
    let mut total = 0.0;
    for captures in years_regex()?.captures_iter(text) {
        if let Some(value) = captures
            .get(1)
            .and_then(|figure| figure.as_str().parse::<f64>().ok())
        {
            found = true;
            total += value;
        }
    }
    found.then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_figure() {
        assert_eq!(
            years_of_experience("8y Python engineer, 2y federal law enforcement support"),
            Some(10.0)
        );
    }

    #[test]
    fn accepts_common_spellings() {
        assert_eq!(years_of_experience("5 years computer vision"), Some(5.0));
        assert_eq!(years_of_experience("12 yrs program management"), Some(12.0));
        assert_eq!(years_of_experience("10+ Years in analytics"), Some(10.0));
        assert_eq!(years_of_experience("1 year; 2.5 yr contract"), Some(3.5));
    }

    #[test]
    fn text_without_figures_is_unparsable() {
        assert_eq!(years_of_experience("Extensive industry background"), None);
        assert_eq!(years_of_experience("Worked on 3 yachts"), None);
        assert_eq!(years_of_experience(""), None);
    }
}
