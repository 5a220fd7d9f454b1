//! Company credibility profile built from pattern scans over the analyzed
//! text. Optionally enhanced with fetched site content, see
//! [`super::verification`].

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    CompanyAssessment, CompanyMaturity, CompanyVisibility, Signal, TrackRecord,
};
use crate::rules::patterns;

static FOUNDED_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:founded|established|est\.?|operating|in\s+business)\s+(?:in\s+|since\s+)?((?:19|20)\d{2})")
        .unwrap()
});

static YEARS_IN_BUSINESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})\+?\s+years?\s+(?:of\s+)?(?:experience|in\s+business|in\s+the\s+industry)")
        .unwrap()
});

static FUNDING_STAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)series\s+[a-d]\b|venture[- ]backed|seed\s+(?:round|funding|stage)|recently\s+funded|raised\s+\$")
        .unwrap()
});

static GROWTH_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)fast[- ]growing|rapidly\s+(?:growing|expanding|scaling)|scaling\s+(?:up|our)|hypergrowth")
        .unwrap()
});

static NAMED_CLIENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:google|microsoft|amazon|apple|meta|ibm|oracle|salesforce|netflix|adobe|intel|cisco|nike|coca[- ]cola|walmart)\b|fortune\s+(?:50|100|500)\s+(?:compan|client|customer)")
        .unwrap()
});

static CASE_STUDY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)case\s+stud(?:y|ies)|success\s+stor(?:y|ies)|customer\s+testimonial")
        .unwrap()
});

static CONFIDENTIAL_REFERENCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)confidential\s+(?:references|clients?|client\s+list)|clients?\s+we\s+(?:cannot|can't)\s+name|references\s+available\s+upon\s+request\s+only|under\s+(?:strict\s+)?nda")
        .unwrap()
});

/// Build a credibility profile from the text alone. Network-free; the deep
/// verification pass may upgrade `track_record` and extend the lists.
pub fn assess_company(text: &str, _signals: &[Signal]) -> CompanyAssessment {
    let mut footprint = Vec::new();
    let mut flags = Vec::new();

    // Presence markers drive visibility
    let mut presence = 0usize;
    if patterns::WEBSITE_URL.is_match(text) {
        presence += 1;
        footprint.push("Company website referenced".to_string());
    }
    if patterns::LINKEDIN.is_match(text) {
        presence += 1;
        footprint.push("LinkedIn profile referenced".to_string());
    }
    if patterns::has_corporate_email(text) {
        presence += 1;
        footprint.push("Corporate email domain in use".to_string());
    } else if patterns::FREE_MAIL.is_match(text) {
        flags.push("Contact address uses a free email provider".to_string());
    }
    if patterns::COMPANY_NAME.is_match(text) {
        presence += 1;
        footprint.push("Registered legal entity named".to_string());
    }

    let visibility = match presence {
        n if n >= 3 => CompanyVisibility::High,
        2 => CompanyVisibility::Moderate,
        1 => CompanyVisibility::Limited,
        _ => CompanyVisibility::Unknown,
    };
    if visibility == CompanyVisibility::Unknown {
        flags.push("No verifiable online presence mentioned".to_string());
    }

    let maturity = assess_maturity(text, &mut footprint);
    let track_record = assess_track_record(text, &mut footprint, &mut flags);

    CompanyAssessment {
        visibility,
        maturity,
        track_record,
        public_footprint: footprint,
        flags,
    }
}

fn assess_maturity(text: &str, footprint: &mut Vec<String>) -> CompanyMaturity {
    if let Some(year) = claimed_founding_year(text) {
        let age = chrono::Utc::now().year() - year;
        footprint.push(format!("States a founding year of {year}"));
        return if age >= 5 {
            CompanyMaturity::Established
        } else {
            CompanyMaturity::Startup
        };
    }
    if YEARS_IN_BUSINESS
        .captures(text)
        .and_then(|c| c[1].parse::<i32>().ok())
        .is_some_and(|years| years >= 5)
    {
        footprint.push("Claims multi-year operating history".to_string());
        return CompanyMaturity::Established;
    }
    if FUNDING_STAGE.is_match(text) || GROWTH_LANGUAGE.is_match(text) {
        return CompanyMaturity::Growth;
    }
    CompanyMaturity::Unknown
}

fn assess_track_record(
    text: &str,
    footprint: &mut Vec<String>,
    flags: &mut Vec<String>,
) -> TrackRecord {
    if CONFIDENTIAL_REFERENCES.is_match(text) {
        flags.push("References described as confidential or unavailable".to_string());
        return TrackRecord::Concerning;
    }
    let named_clients = NAMED_CLIENTS.is_match(text);
    let case_studies = CASE_STUDY.is_match(text);
    if named_clients || case_studies {
        if named_clients {
            footprint.push("Names recognizable client brands".to_string());
        }
        if case_studies {
            footprint.push("Mentions published case studies".to_string());
        }
        // Claimed, not verified: upgrading requires cross-checking fetched
        // site content
        return TrackRecord::Claimed;
    }
    TrackRecord::Unverified
}

/// Founding year the text claims, if any
pub fn claimed_founding_year(text: &str) -> Option<i32> {
    FOUNDED_YEAR
        .captures(text)
        .and_then(|c| c[1].parse::<i32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_presence_scores_high_visibility() {
        let text = "Acme Corp (https://acme.example) — reach me at jane@acme.example \
                    or on linkedin.com/in/jane-doe.";
        let assessment = assess_company(text, &[]);
        assert_eq!(assessment.visibility, CompanyVisibility::High);
        assert!(assessment.flags.is_empty());
    }

    #[test]
    fn no_presence_markers_is_unknown_with_flag() {
        let assessment = assess_company("We can help you grow.", &[]);
        assert_eq!(assessment.visibility, CompanyVisibility::Unknown);
        assert!(assessment
            .flags
            .iter()
            .any(|f| f.contains("online presence")));
    }

    #[test]
    fn old_founding_year_is_established() {
        let assessment = assess_company("Founded in 2008, we build tooling.", &[]);
        assert_eq!(assessment.maturity, CompanyMaturity::Established);
        assert_eq!(claimed_founding_year("Founded in 2008"), Some(2008));
    }

    #[test]
    fn recent_founding_year_is_startup() {
        let year = chrono::Utc::now().year() - 1;
        let text = format!("Established {year}, we move fast.");
        assert_eq!(assess_company(&text, &[]).maturity, CompanyMaturity::Startup);
    }

    #[test]
    fn funding_language_reads_as_growth() {
        let assessment = assess_company("We are a Series B venture-backed team.", &[]);
        assert_eq!(assessment.maturity, CompanyMaturity::Growth);
    }

    #[test]
    fn named_brands_are_claimed_not_verified() {
        let assessment = assess_company("Our clients include Google and Microsoft.", &[]);
        assert_eq!(assessment.track_record, TrackRecord::Claimed);
    }

    #[test]
    fn confidential_references_are_concerning() {
        let assessment =
            assess_company("Our client list is confidential, references under NDA.", &[]);
        assert_eq!(assessment.track_record, TrackRecord::Concerning);
    }

    #[test]
    fn free_email_raises_a_flag() {
        let assessment = assess_company("Contact bob.sales@gmail.com today.", &[]);
        assert!(assessment
            .flags
            .iter()
            .any(|f| f.contains("free email")));
    }
}
