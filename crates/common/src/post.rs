use serde::{Deserialize, Serialize};

pub const SEARCH_RESULT_LIMIT: usize = 10;

/// One entry of the site's static post index (`/search.json`). The index is
/// generated from templates that use both lowercase and generator-cased keys,
/// so the aliases accept either.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostMeta {
    #[serde(alias = "LinkTitle")]
    pub title: String,
    #[serde(alias = "RelPermalink")]
    pub url: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, alias = "Date")]
    pub date: String,
    #[serde(default, alias = "FormattedDate")]
    pub formatted_date: String,
    #[serde(default, alias = "Summary")]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Case-insensitive substring match over title and tags. An empty query
/// matches nothing; the caller caps the result list for display.
pub fn search_posts<'a>(posts: &'a [PostMeta], query: &str) -> Vec<&'a PostMeta> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&query)
                || post.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// Date filter for the archive page, parsed from the page query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArchiveFilter {
    Day { year: String, month: String, day: String },
    Month { year: String, month: String },
    Year { year: String },
}

impl ArchiveFilter {
    /// `date` wins over `year`/`month`; no recognized parameter means the
    /// archive page renders its static content untouched.
    pub fn from_query<'a>(
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Option<ArchiveFilter> {
        let mut date = None;
        let mut year = None;
        let mut month = None;
        for (key, value) in params {
            match key {
                "date" => date = Some(value.to_string()),
                "year" => year = Some(value.to_string()),
                "month" => month = Some(value.to_string()),
                _ => {}
            }
        }
        if let Some(date) = date {
            let mut parts = date.splitn(3, '-');
            if let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) {
                return Some(ArchiveFilter::Day {
                    year: y.to_string(),
                    month: m.to_string(),
                    day: d.to_string(),
                });
            }
            return None;
        }
        match (year, month) {
            (Some(year), Some(month)) => Some(ArchiveFilter::Month {
                year,
                month: format!("{month:0>2}"),
            }),
            (Some(year), None) => Some(ArchiveFilter::Year { year }),
            _ => None,
        }
    }

    /// Prefix compared against the post index's ISO date strings.
    pub fn date_prefix(&self) -> String {
        match self {
            ArchiveFilter::Day { year, month, day } => format!("{year}-{month}-{day}"),
            ArchiveFilter::Month { year, month } => format!("{year}-{month}"),
            ArchiveFilter::Year { year } => year.clone(),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            ArchiveFilter::Day { year, month, day } => {
                format!("{year}年{month}月{day}日の記事")
            }
            ArchiveFilter::Month { year, month } => format!("{year}年{month}月の記事"),
            ArchiveFilter::Year { year } => format!("{year}年の記事"),
        }
    }

    pub fn matches(&self, post: &PostMeta) -> bool {
        post.date.starts_with(&self.date_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(title: &str, date: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            title: title.to_string(),
            url: format!("/blog/{title}/"),
            slug: title.to_lowercase(),
            date: date.to_string(),
            formatted_date: String::new(),
            summary: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn search_matches_title_and_tags_case_insensitively() {
        let posts = vec![
            post("Rust入門", "2024-01-02", &["programming"]),
            post("Garden Notes", "2024-02-10", &["Plants", "diary"]),
        ];
        assert_eq!(search_posts(&posts, "rust").len(), 1);
        assert_eq!(search_posts(&posts, "PLANT").len(), 1);
        assert_eq!(search_posts(&posts, "diary")[0].title, "Garden Notes");
        assert_eq!(search_posts(&posts, "nomatch").len(), 0);
        assert_eq!(search_posts(&posts, "").len(), 0);
    }

    #[test]
    fn filter_parses_query_parameters() {
        assert_eq!(
            ArchiveFilter::from_query(vec![("date", "2023-08-21")]),
            Some(ArchiveFilter::Day {
                year: "2023".to_string(),
                month: "08".to_string(),
                day: "21".to_string(),
            })
        );
        assert_eq!(
            ArchiveFilter::from_query(vec![("year", "2023"), ("month", "8")]),
            Some(ArchiveFilter::Month {
                year: "2023".to_string(),
                month: "08".to_string(),
            })
        );
        assert_eq!(
            ArchiveFilter::from_query(vec![("year", "2023")]),
            Some(ArchiveFilter::Year {
                year: "2023".to_string()
            })
        );
        assert_eq!(ArchiveFilter::from_query(vec![("page", "2")]), None);
        assert_eq!(ArchiveFilter::from_query(vec![]), None);
    }

    #[test]
    fn date_takes_precedence_over_year() {
        let filter = ArchiveFilter::from_query(vec![("year", "2020"), ("date", "2023-08-21")]);
        assert_eq!(filter.map(|f| f.date_prefix()), Some("2023-08-21".to_string()));
    }

    #[test]
    fn filter_matches_by_date_prefix() {
        let posts = vec![
            post("a", "2023-08-21T10:00:00+09:00", &[]),
            post("b", "2023-08-02", &[]),
            post("c", "2023-09-01", &[]),
        ];
        let month = ArchiveFilter::Month {
            year: "2023".to_string(),
            month: "08".to_string(),
        };
        let matched: Vec<_> = posts.iter().filter(|p| month.matches(p)).collect();
        assert_eq!(matched.len(), 2);

        let day = ArchiveFilter::Day {
            year: "2023".to_string(),
            month: "08".to_string(),
            day: "21".to_string(),
        };
        let matched: Vec<_> = posts.iter().filter(|p| day.matches(p)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "a");
    }

    #[test]
    fn heading_is_human_readable() {
        let month = ArchiveFilter::Month {
            year: "2023".to_string(),
            month: "08".to_string(),
        };
        assert_eq!(month.heading(), "2023年08月の記事");
    }

    #[test]
    fn index_accepts_generator_cased_keys() {
        let json = r#"{
            "LinkTitle": "Hello",
            "RelPermalink": "/blog/hello/",
            "Date": "2024-03-01",
            "FormattedDate": "2024年3月1日",
            "Summary": "first post"
        }"#;
        let post: PostMeta = serde_json::from_str(json).expect("valid index entry");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.url, "/blog/hello/");
        assert_eq!(post.date, "2024-03-01");
    }
}
