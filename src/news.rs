use std::collections::HashSet;
use chrono::DateTime;
use crate::models::report::NewsItem;

/// Display format for headline publish times
const PUB_DATE_FORMAT: &str = "%m/%d %H:%M";

/// Reformats an RFC 822 publish timestamp for display.
///
/// Feeds occasionally carry timestamps chrono cannot read, those are shown
/// verbatim rather than dropped.
///
/// # Arguments
///
/// * 'raw' - the pubDate text from the feed
pub fn format_pub_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(parsed) => parsed.format(PUB_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Removes headlines already present in the primary list from the secondary
/// list, by exact title match, keeping at most 'cap' items.
///
/// Order is preserved and the scan stops as soon as the cap is reached, items
/// beyond that point are dropped even when earlier ones were duplicates.
///
/// # Arguments
///
/// * 'secondary' - the list to filter, in feed order
/// * 'primary' - the list whose titles must not reappear
/// * 'cap' - maximum number of items to keep
pub fn dedup_headlines(secondary: Vec<NewsItem>, primary: &[NewsItem], cap: usize) -> Vec<NewsItem> {
    let primary_titles: HashSet<&str> = primary.iter().map(|item| item.title.as_str()).collect();

    let mut filtered = Vec::new();
    for item in secondary {
        if primary_titles.contains(item.title.as_str()) {
            continue;
        }
        filtered.push(item);
        if filtered.len() >= cap {
            break;
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: format!("https://example.com/{}", title),
            description: String::new(),
            pub_date: String::new(),
        }
    }

    #[test]
    fn formats_rfc822_timestamps() {
        assert_eq!(format_pub_date("Tue, 30 Sep 2025 12:19:00 +0900"), "09/30 12:19");
        assert_eq!(format_pub_date("Mon, 02 Jan 2006 15:04:05 -0700"), "01/02 15:04");
    }

    #[test]
    fn unparseable_timestamps_stay_verbatim() {
        assert_eq!(format_pub_date("2025年9月30日"), "2025年9月30日");
        assert_eq!(format_pub_date(""), "");
    }

    #[test]
    fn drops_titles_present_in_the_primary_list() {
        let primary = vec![item("A"), item("B")];
        let secondary = vec![item("A"), item("C"), item("D")];

        let filtered = dedup_headlines(secondary, &primary, 2);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "C");
        assert_eq!(filtered[1].title, "D");
    }

    #[test]
    fn stops_at_the_cap_without_reconsidering_later_items() {
        let primary = vec![item("A")];
        let secondary = vec![item("B"), item("C"), item("D"), item("E")];

        let filtered = dedup_headlines(secondary, &primary, 2);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "B");
        assert_eq!(filtered[1].title, "C");
    }

    #[test]
    fn titles_match_exactly_with_no_normalization() {
        let primary = vec![item("速報 A")];
        let secondary = vec![item("速報  A"), item("速報 a")];

        let filtered = dedup_headlines(secondary, &primary, 5);

        assert_eq!(filtered.len(), 2);
    }
}
