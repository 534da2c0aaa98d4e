use chrono::NaiveDate;

use crate::domain::FeedbackRecord;
use crate::error::CoreError;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

const LINE_BREAK_MARKUP: &str = "<br /><br />\n";

/// Parses a feedback date written as DD/MM/YYYY
pub fn parse_feedback_date(date: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(date.to_string()))
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes a comment and turns every newline into a pair of HTML line breaks
pub fn comments_to_markup(comments: &str) -> String {
    html_escape(comments).replace('\n', LINE_BREAK_MARKUP)
}

/// Public LinkedIn profile URL for an identifier
pub fn profile_link(id: &str) -> String {
    format!("https://www.linkedin.com/in/{}/", id)
}

/// Newest first; on the same day the most positive feedback comes first
pub fn sort_feedback(records: &mut [FeedbackRecord]) {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.sentiment.total_cmp(&a.sentiment))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersonRecord;

    fn person(name: &str) -> PersonRecord {
        PersonRecord {
            name: name.to_string(),
            role: "Engineer".to_string(),
            profile_link: String::new(),
            profile_image: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    fn record(date: &str, sentiment: f64) -> FeedbackRecord {
        FeedbackRecord {
            reviewer: person("Ana"),
            reviewee: person("Luis"),
            date: parse_feedback_date(date).unwrap(),
            date_label: date.to_string(),
            comments: String::new(),
            sentiment,
        }
    }

    #[test]
    fn test_parse_feedback_date_day_first() {
        let date = parse_feedback_date("02/01/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_feedback_date_rejects_iso() {
        let err = parse_feedback_date("2024-01-02").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate(ref d) if d == "2024-01-02"));
    }

    #[test]
    fn test_parse_feedback_date_rejects_impossible_day() {
        assert!(parse_feedback_date("31/02/2024").is_err());
    }

    #[test]
    fn test_parse_feedback_date_rejects_trailing_whitespace() {
        assert!(parse_feedback_date("02/01/2024 ").is_err());
    }

    #[test]
    fn test_comments_to_markup_escapes_before_line_breaks() {
        assert_eq!(
            comments_to_markup("<script>alert(1)</script>\nTom & \"Jerry\""),
            "&lt;script&gt;alert(1)&lt;/script&gt;<br /><br />\nTom &amp; &quot;Jerry&quot;"
        );
    }

    #[test]
    fn test_html_escape_ampersand_first() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
        assert_eq!(html_escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_comments_to_markup() {
        assert_eq!(
            comments_to_markup("Great work.\nKeep it up."),
            "Great work.<br /><br />\nKeep it up."
        );
    }

    #[test]
    fn test_comments_to_markup_without_newlines() {
        assert_eq!(comments_to_markup("Solid."), "Solid.");
    }

    #[test]
    fn test_profile_link() {
        assert_eq!(profile_link("jdoe"), "https://www.linkedin.com/in/jdoe/");
    }

    #[test]
    fn test_sort_feedback_later_date_wins_over_sentiment() {
        let mut records = vec![record("01/01/2024", 0.9), record("02/01/2024", 0.5)];
        sort_feedback(&mut records);
        assert_eq!(records[0].date_label, "02/01/2024");
        assert_eq!(records[1].date_label, "01/01/2024");
    }

    #[test]
    fn test_sort_feedback_same_date_by_sentiment() {
        let mut records = vec![record("05/03/2024", 0.3), record("05/03/2024", 0.8)];
        sort_feedback(&mut records);
        assert_eq!(records[0].sentiment, 0.8);
        assert_eq!(records[1].sentiment, 0.3);
    }

    #[test]
    fn test_sort_feedback_compares_dates_not_strings() {
        // "31/12/2023" sorts after "01/01/2024" as text
        let mut records = vec![record("31/12/2023", 0.0), record("01/01/2024", 0.0)];
        sort_feedback(&mut records);
        assert_eq!(records[0].date_label, "01/01/2024");
    }
}
