//! Deep company verification: fetch up to three URLs mentioned in the text
//! and cross-reference the claims made against what the sites actually say.
//!
//! Every fetch is an independent call with its own timeout; failures are
//! isolated per URL and the assessment degrades to the pattern-only result.

use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::company::claimed_founding_year;
use crate::fetch::PageFetcher;
use crate::model::{CompanyAssessment, TrackRecord};

const MAX_VERIFICATION_URLS: usize = 3;

static URL_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>\)\]]+").unwrap());

static BRAND_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(google|microsoft|amazon|apple|meta|ibm|oracle|salesforce|netflix|adobe|intel|cisco|nike|walmart)\b")
        .unwrap()
});

static AWARD_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)award|certified|certification|iso\s*\d{4,5}|soc\s*2|accredit").unwrap()
});

/// Candidate verification URLs found in the text, de-duplicated by host
fn verification_urls(text: &str) -> Vec<Url> {
    let mut urls: Vec<Url> = Vec::new();
    for m in URL_IN_TEXT.find_iter(text) {
        let candidate = m.as_str().trim_end_matches(['.', ',', ';']);
        if let Ok(url) = Url::parse(candidate) {
            if urls.iter().any(|u| u.host_str() == url.host_str()) {
                continue;
            }
            urls.push(url);
        }
        if urls.len() == MAX_VERIFICATION_URLS {
            break;
        }
    }
    urls
}

/// Cross-reference the pattern-only assessment against fetched site content.
/// Returns the base assessment untouched when no URL yields a page.
pub async fn verify_company(
    fetcher: &dyn PageFetcher,
    text: &str,
    mut assessment: CompanyAssessment,
) -> CompanyAssessment {
    let urls = verification_urls(text);
    if urls.is_empty() {
        return assessment;
    }

    let fetches = urls.iter().map(|url| fetcher.fetch(url));
    let mut pages = Vec::new();
    for (url, result) in urls.iter().zip(join_all(fetches).await) {
        match result {
            Ok(page) => pages.push(page),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Company verification fetch failed");
            }
        }
    }
    if pages.is_empty() {
        return assessment;
    }
    let site_text: String = pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    // Named big-brand clients: claimed becomes verified only when the site
    // itself repeats the same brand
    if assessment.track_record == TrackRecord::Claimed {
        let claimed_brands: Vec<&str> = BRAND_MENTION
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        let confirmed = claimed_brands.iter().any(|brand| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(brand));
            Regex::new(&pattern)
                .map(|re| re.is_match(&site_text))
                .unwrap_or(false)
        });
        if confirmed {
            assessment.track_record = TrackRecord::Verified;
            assessment
                .public_footprint
                .push("Client claims corroborated on the company site".to_string());
        } else if !claimed_brands.is_empty() {
            assessment
                .flags
                .push("Named clients do not appear on the company site".to_string());
        }
    }

    // Claimed years in business vs. founding year published on the site
    if let (Some(claimed), Some(published)) =
        (claimed_founding_year(text), claimed_founding_year(&site_text))
    {
        if claimed != published {
            assessment.flags.push(format!(
                "Founding year mismatch: message says {claimed}, site says {published}"
            ));
        }
    }

    if AWARD_MENTION.is_match(&site_text) {
        assessment
            .public_footprint
            .push("Awards or certifications listed on the company site".to_string());
    }

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, FetchedPage};
    use crate::model::{CompanyMaturity, CompanyVisibility, UrlMetadata};
    use async_trait::async_trait;

    struct StubFetcher {
        body: Option<String>,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
            match &self.body {
                Some(body) => Ok(FetchedPage {
                    url: url.clone(),
                    metadata: UrlMetadata {
                        domain: url.host_str().unwrap_or_default().to_string(),
                        is_https: true,
                        page_title: None,
                    },
                    text: body.clone(),
                }),
                None => Err(FetchError::NotFound(url.to_string())),
            }
        }
    }

    fn claimed_assessment() -> CompanyAssessment {
        CompanyAssessment {
            visibility: CompanyVisibility::Moderate,
            maturity: CompanyMaturity::Unknown,
            track_record: TrackRecord::Claimed,
            public_footprint: Vec::new(),
            flags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn corroborated_brand_claims_become_verified() {
        let fetcher = StubFetcher {
            body: Some("Trusted by Google and hundreds of teams.".to_string()),
        };
        let text = "Our clients include Google. See https://acme.example for more.";

        let verified = verify_company(&fetcher, text, claimed_assessment()).await;
        assert_eq!(verified.track_record, TrackRecord::Verified);
    }

    #[tokio::test]
    async fn uncorroborated_claims_stay_claimed_and_get_flagged() {
        let fetcher = StubFetcher {
            body: Some("We are a small consultancy.".to_string()),
        };
        let text = "Our clients include Microsoft. See https://acme.example for more.";

        let result = verify_company(&fetcher, text, claimed_assessment()).await;
        assert_eq!(result.track_record, TrackRecord::Claimed);
        assert!(result.flags.iter().any(|f| f.contains("do not appear")));
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_pattern_only_result() {
        let fetcher = StubFetcher { body: None };
        let text = "See https://down.example for details.";

        let base = claimed_assessment();
        let result = verify_company(&fetcher, text, base.clone()).await;
        assert_eq!(result.track_record, base.track_record);
        assert!(result.flags.is_empty());
    }

    #[tokio::test]
    async fn founding_year_mismatch_is_flagged() {
        let fetcher = StubFetcher {
            body: Some("Founded in 2021 by two engineers.".to_string()),
        };
        let text = "Established in 2005. Visit https://acme.example today.";

        let result = verify_company(&fetcher, text, claimed_assessment()).await;
        assert!(result
            .flags
            .iter()
            .any(|f| f.contains("Founding year mismatch")));
    }

    #[test]
    fn at_most_three_distinct_hosts_are_fetched() {
        let text = "https://a.example https://a.example/other https://b.example \
                    https://c.example https://d.example";
        let urls = verification_urls(text);
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0].host_str(), Some("a.example"));
    }
}
