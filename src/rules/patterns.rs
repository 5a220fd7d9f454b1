//! Compiled pattern tables shared across the rule catalog.
//!
//! Every regex is compiled once at first use. Marker-count helpers implement
//! the numeric thresholds that several substance-deficit detectors rely on;
//! those thresholds are load-bearing business logic, not tuning knobs.

use once_cell::sync::Lazy;
use regex::Regex;

fn re(pattern: &str) -> Regex {
    // Catalog patterns are static literals; a failure here is a programming
    // error caught by the catalog integrity test.
    Regex::new(pattern).expect("invalid catalog pattern")
}

// ---------------------------------------------------------------------------
// Legal clause patterns
// ---------------------------------------------------------------------------

pub static IRREVOCABLE_CONSENT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)irrevocabl[ey]\s+(consent|agree|grant)|consent.{0,50}(cannot|may not)\s+be\s+withdrawn")
});

pub static UNILATERAL_MODIFICATION: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(modify|change|amend|alter).{0,40}(terms|agreement).{0,40}(at any time|without (prior )?notice|sole discretion)|unilateral(ly)?\s+(modif|chang|amend)")
});

pub static RETROACTIVE_BILLING: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)retroactive(ly)?\s+(bill|charg|appl)|(bill|charge)[a-z]*\s+retroactively|charges?\s+may\s+apply\s+to\s+(prior|past|previous)")
});

pub static SUIT_WAIVER: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)waive.{0,40}right\s+to\s+(sue|a\s+jury|jury\s+trial|class\s+action)|waive.{0,30}(court|litigation)|class\s+action\s+waiver")
});

pub static FORCED_ARBITRATION: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)(binding|mandatory|private)\s+arbitration|arbitration\s+(is|shall be)\s+(binding|mandatory|final)"));

pub static PERPETUAL_DATA_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(perpetual|irrevocable|worldwide).{0,40}(license|right).{0,40}(content|data|material)|assign.{0,30}all\s+(rights|intellectual\s+property)|intellectual\s+property.{0,40}becomes?\s+(our|the\s+company)")
});

pub static NEGLIGENCE_INDEMNIFICATION: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(indemnif|hold\s+harmless).{0,60}(negligence|errors?|omissions?)|indemnify\s+(us|the\s+(company|provider))")
});

pub static SURVIVAL_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)survives?\s+(the\s+)?(termination|expiration|cancellation|closure)|perpetual\s+obligation|obligations?\s+.{0,30}continue\s+after")
});

pub static UNLIMITED_LIABILITY: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)unlimited\s+liability|liable\s+for\s+(any|all)\s+(losses|damages|costs|fees)|(you|user)\s+(bear|assume)s?\s+all\s+risk")
});

pub static OPAQUE_AUTO_RENEWAL: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)auto(matic(ally)?)?[- ]renew.{0,60}(without|unless).{0,30}(notice|notif|cancel)|renews?\s+automatically")
});

pub static UNRESTRICTED_DATA_SHARING: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(share|sell|transfer|disclose|monetize).{0,40}(data|information).{0,50}(third.part|affiliates?|partners?)\w*.{0,30}(without\s+restriction|without\s+(your\s+)?consent|for\s+any\s+purpose)|sell\s+your\s+(data|information)")
});

pub static SILENCE_AS_CONSENT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)silence.{0,30}(consent|acceptance)|deemed\s+(to\s+have\s+)?accept|failure\s+to\s+(object|respond).{0,40}(consent|acceptance|agreement)")
});

// ---------------------------------------------------------------------------
// Consumer / scam patterns
// ---------------------------------------------------------------------------

pub static URGENCY: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(urgent(ly)?|immediately|act\s+now|right\s+away|asap|expires?\s+(today|soon|tonight))\b|within\s+\d+\s+(hours?|minutes?)|final\s+(notice|warning)|last\s+chance")
});

/// Mitigating pattern: urgency tied to documented advance notice is not a risk
pub static ADVANCE_NOTICE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\d+\s+(business\s+)?days'?\s+(advance\s+)?notice|prior\s+(written\s+)?notice|notify\s+you\s+(in\s+advance|before(hand)?)|advance\s+notification")
});

pub static UNUSUAL_PAYMENT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)gift\s+cards?|wire\s+transfer|western\s+union|moneygram|\bbitcoin\b|\bcrypto(currency)?\b|prepaid\s+(card|debit)|money\s+order")
});

pub static TOO_GOOD_TO_BE_TRUE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)risk[- ]free|guaranteed?\s+(returns?|profits?|income|winnings)|100%\s+(free|guaranteed|safe)|double\s+your\s+(money|investment)|no\s+(risk|catch)\s|you\s+(have\s+)?won")
});

pub static IMPERSONATION: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(we\s+are|this\s+is|on\s+behalf\s+of)\s+(your\s+bank|the\s+(irs|government|tax\s+office)|microsoft|apple\s+support|amazon\s+security)|official\s+(notice|notification)\s+from|your\s+account\s+(has\s+been|will\s+be)\s+(suspended|locked|closed|compromised)")
});

pub static SENSITIVE_INFO_REQUEST: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(verify|confirm|provide|send|update)\s+(your\s+)?.{0,30}(password|ssn|social\s+security|bank\s+account|credit\s+card|card\s+number|pin\b|date\s+of\s+birth)")
});

// ---------------------------------------------------------------------------
// Client-inquiry quality patterns
// ---------------------------------------------------------------------------

pub static LOW_INTENT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)just\s+(wondering|curious|checking|browsing)|some\s+(general\s+)?information|tell\s+me\s+more|whatever\s+you\s+(have|think|suggest)|not\s+sure\s+what\s+(i|we)\s+(need|want)")
});

pub static INQUIRY_LIKE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)interested\s+in\s+your|your\s+(services|products|company|agency|work)|can\s+you\s+(help|build|develop|design|do)|\b(quote|inquiry|enquiry)\b|looking\s+(for|to\s+hire)|need\s+help\s+with")
});

pub static UNREALISTIC_DEADLINE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)by\s+(tomorrow|tonight|end\s+of\s+(the\s+)?day)|within\s+(24|48)\s+hours|in\s+(a|one|two)\s+days?\b|overnight\b")
});

pub static LARGE_SCOPE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(full|entire|complete|whole)\s+(site|website|app(lication)?|platform|system|rebuild|redesign)|from\s+scratch|end[- ]to[- ]end\s+(solution|build)")
});

pub static PROCESS_BYPASS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)skip\s+the\s+(contract|paperwork|formalities)|no\s+need\s+for\s+(a\s+)?contract|off\s+the\s+books|avoid\s+(the\s+)?(procurement|legal|finance)|outside\s+(the|of|your)\s+(normal\s+)?(process|channels)|pay\s+(in\s+)?cash\b")
});

pub static TEMPLATE_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)dear\s+(sir|madam|sir/madam|sirs)|to\s+whom\s+it\s+may\s+concern|dear\s+(business|website|site)\s+owner|i\s+came\s+across\s+your\s+(website|profile|company)")
});

// ---------------------------------------------------------------------------
// Substance markers (identity/offering) and their negatives
// ---------------------------------------------------------------------------

pub static COMPANY_NAME: Lazy<Regex> =
    Lazy::new(|| re(r"\b(Inc\.?|LLC|Ltd\.?|Corp\.?|GmbH|Company|Technologies|Solutions|Labs)\b"));

pub static PERSON_NAME: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i:my\s+name\s+is)\s+[A-Z]|(?:(?i:regards|sincerely|best\s+regards|thanks|cheers)),?\s*\r?\n\s*[A-Z][a-z]+")
});

pub static WEBSITE_URL: Lazy<Regex> = Lazy::new(|| re(r"(?i)https?://[^\s<>]+|www\.[a-z0-9-]+\.[a-z]{2,}"));

pub static LINKEDIN: Lazy<Regex> = Lazy::new(|| re(r"(?i)linkedin\.com"));

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}"));

pub static FREE_MAIL: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)@(gmail|yahoo|hotmail|outlook|aol|proton(mail)?)\."));

pub static SPECIFIC_OFFERING: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(web\s+design|software\s+development|app\s+development|seo|digital\s+marketing|consulting|accounting|staffing|logistics|penetration\s+testing|data\s+migration|cloud\s+migration)\b")
});

pub static NUMERIC_SPECIFICS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\$\s?[\d,]+|\d+\s?%|\b\d+\s+(users?|clients?|customers?|employees|years?|weeks?|months?)\b")
});

/// Corporate email: an address not hosted on a free-mail provider
pub fn has_corporate_email(text: &str) -> bool {
    EMAIL
        .find_iter(text)
        .any(|m| !FREE_MAIL.is_match(m.as_str()))
}

/// Count of the six identity/offering substance markers present in the text.
/// Low-substance detection fires when at least four of the six are missing.
pub fn substance_marker_count(text: &str) -> usize {
    let mut count = 0;
    if COMPANY_NAME.is_match(text) {
        count += 1;
    }
    if PERSON_NAME.is_match(text) {
        count += 1;
    }
    if WEBSITE_URL.is_match(text) {
        count += 1;
    }
    if has_corporate_email(text) {
        count += 1;
    }
    if SPECIFIC_OFFERING.is_match(text) {
        count += 1;
    }
    if NUMERIC_SPECIFICS.is_match(text) {
        count += 1;
    }
    count
}

/// Count of the four verifiability elements: website, LinkedIn, corporate
/// email, legal company name
pub fn verifiability_count(text: &str) -> usize {
    let mut count = 0;
    if WEBSITE_URL.is_match(text) {
        count += 1;
    }
    if LINKEDIN.is_match(text) {
        count += 1;
    }
    if has_corporate_email(text) {
        count += 1;
    }
    if COMPANY_NAME.is_match(text) {
        count += 1;
    }
    count
}

// ---------------------------------------------------------------------------
// Assertive language vs proof markers
// ---------------------------------------------------------------------------

static ASSERTIVE_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)industry[- ]leading",
        r"(?i)award[- ]winning",
        r"(?i)best[- ]in[- ]class",
        r"(?i)world[- ]class",
        r"(?i)top[- ]rated",
        r"(?i)\#1\b|number\s+one\b",
        r"(?i)leading\s+provider",
        r"(?i)proven\s+track\s+record",
        r"(?i)trusted\s+by\s+(thousands|millions)",
        r"(?i)guaranteed\s+results",
    ]
    .iter()
    .map(|p| re(p))
    .collect()
});

pub static PROOF_MARKERS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)case\s+stud(y|ies)|portfolio|references?\s+(available|upon\s+request|attached)|testimonials?|clients?\s+(such\s+as|include|like)\s|we\s+worked\s+with|\d+\s?%\s+(increase|growth|improvement|reduction)")
});

/// Number of distinct assertive phrases present.
/// Confidence-without-evidence fires at >= 2 with zero proof markers.
pub fn assertive_count(text: &str) -> usize {
    ASSERTIVE_PHRASES.iter().filter(|r| r.is_match(text)).count()
}

static BUZZWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bsynerg(y|ies|istic)\b",
        r"(?i)\bleverage\b",
        r"(?i)cutting[- ]edge",
        r"(?i)next[- ]generation",
        r"(?i)\brevolutionary\b",
        r"(?i)\bdisruptive\b",
        r"(?i)game[- ]chang(er|ing)",
        r"(?i)innovative\s+solutions?",
        r"(?i)\bholistic\b",
        r"(?i)paradigm\s+shift",
    ]
    .iter()
    .map(|p| re(p))
    .collect()
});

pub static CONCRETE_SPECIFICS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\$\s?[\d,]+|\d+\s?%|\b(deliverables?|milestones?|scope\s+of\s+work|statement\s+of\s+work|timeline)\b")
});

/// Number of distinct buzzword families present.
/// Vague-value-proposition fires at >= 2 without concrete specifics.
pub fn buzzword_count(text: &str) -> usize {
    BUZZWORDS.iter().filter(|r| r.is_match(text)).count()
}

// ---------------------------------------------------------------------------
// Proposal/vendor framing
// ---------------------------------------------------------------------------

pub static PROPOSAL_LIKE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(proposal|partnership|collaborat\w+)\b|\bour\s+(services|products?|platform|solution|agency|team|company)\b|we\s+(offer|provide|specialize|deliver)")
});

pub static VENDOR_LIKE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(pricing|quote|subscription|per\s+month|per\s+user|contract\s+term)\b|\bour\s+(services|product|platform|solution)\b|free\s+trial|\b(vendor|supplier)\b")
});

pub static CLIENT_OBLIGATIONS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(you|the\s+(client|customer))\s+(must|shall|agrees?\s+to|is\s+responsible\s+for|are\s+responsible\s+for)")
});

pub static PROVIDER_COMMITMENTS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(we|the\s+(provider|vendor|company))\s+(guarantee|warrant|commit|shall\s+provide|are\s+responsible\s+for|will\s+deliver)")
});

pub static COMMERCIAL_SAFEGUARDS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\bsla\b|service\s+level|support\s+(plan|hours|included)|warranty|guarantee[sd]?\b|refund\s+policy|money[- ]back")
});

pub static OVERPROMISE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)guaranteed?\s+(results|growth|roi|rankings|leads)|\d{2,}\s?%\s+(increase|growth|improvement)\s+guaranteed|overnight\s+(success|results)|triple\s+your")
});

pub static SCALE_CLAIMS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(thousands|millions)\s+of\s+(clients|customers|users)|fortune\s+500|global\s+leader|offices\s+worldwide")
});

pub static LOCK_IN: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)minimum\s+(term|commitment)|early\s+termination\s+fee|cancellation\s+fee|locked\s+in\s+for|non[- ]cancellable|\d+[- ](year|month)\s+(minimum|commitment|contract)")
});

pub static NO_REFUND: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)no\s+refunds?\b|non[- ]refundable|all\s+sales\s+(are\s+)?final"));

// ---------------------------------------------------------------------------
// Compliance and authority framing
// ---------------------------------------------------------------------------

pub static COMPLIANCE_MENTION: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(gdpr|hipaa|soc\s?2|iso\s?27001|pci[- ]dss)\b|fully\s+compliant|compliance\s+certified")
});

pub static COMPLIANCE_EVIDENCE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)certificat(e|ion)\s+(number|id|available)|audit(ed)?\s+(report|by)|attestation|assessed\s+by")
});

pub static VAGUE_AUTHORITY: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(our|the)\s+(legal|compliance|management|executive)\s+team\s+(requires|has\s+determined|insists|mandates)|as\s+per\s+(company\s+)?policy|industry\s+standards?\s+requires?")
});

// ---------------------------------------------------------------------------
// Generic uncertainty / green-flag patterns
// ---------------------------------------------------------------------------

pub static OUTREACH_LIKE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\b(contact|reach\s+out|reach\s+me|reply|respond|get\s+back|offer|opportunity|regards|sincerely)\b")
});

pub static UNVERIFIABLE_CLAIMS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)studies\s+show|research\s+proves|experts\s+agree|scientifically\s+proven|clinically\s+proven|statistics\s+confirm")
});

pub static CITATION: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)https?://|\bjournal\b|\buniversity\b|published\s+(in|by)|\(\d{4}\)")
});

pub static PROFESSIONAL_TONE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)please\s+find|we\s+propose|scope\s+of\s+work|\bdeliverables?\b|\btimeline\b|\bbudget\b|statement\s+of\s+work|next\s+steps")
});

pub static REFERENCE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)(order|invoice|case|ticket|reference|confirmation)\s+(number|no\.?|id|\#)\s*[:#]?\s*[A-Za-z0-9-]{4,}")
});

pub static BUDGET_STATED: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)\$\s?[\d,]+|budget\s+(of|is|:)|allocated\s+budget"));

pub static TIMELINE_STATED: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\bq[1-4]\b|\bdeadline\b|\btimeline\b|by\s+(january|february|march|april|may|june|july|august|september|october|november|december)|deliver(y|ed)?\s+by")
});

pub static REQUIREMENTS_STATED: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)we\s+(need|require)|our\s+requirements?|we\s+are\s+looking\s+for|must\s+(support|include|integrate)")
});

pub static VENDOR_TRANSPARENCY: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)pricing\s+(is\s+)?(listed|published|available\s+(online|on\s+our))|case\s+stud(y|ies)|references?\s+available|\bportfolio\b|testimonials?|view\s+our\s+(work|clients)")
});

pub static USER_RIGHTS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)right\s+to\s+(cancel|opt[- ]?out|withdraw|a\s+refund)|\d+[- ]day\s+(money[- ]back|refund|trial)|cancel\s+(anytime|at\s+any\s+time)|data\s+(deletion|portability|export)")
});

// ---------------------------------------------------------------------------
// User-protection patterns for the structural-imbalance escalation
// ---------------------------------------------------------------------------

pub static PROTECTION_OPT_OUT: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)opt[- ]?out|right\s+to\s+(cancel|withdraw|terminate)|may\s+close\s+your\s+account")
});

pub static PROTECTION_DISPUTE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)dispute\s+(resolution\s+)?process|small\s+claims\s+court|you\s+may\s+(bring|pursue|file)\s+|complaint\s+procedure")
});

pub static PROTECTION_REFUND: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)refund(s|able)?\b|money[- ]back|reimburse")
});

/// Advance-notice protection reuses [`ADVANCE_NOTICE`], which also mitigates
/// the urgency-language rule.
pub fn protection_count(text: &str) -> usize {
    [
        PROTECTION_OPT_OUT.is_match(text),
        PROTECTION_DISPUTE.is_match(text),
        PROTECTION_REFUND.is_match(text),
        ADVANCE_NOTICE.is_match(text),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}

// ---------------------------------------------------------------------------
// Website / scraped-page patterns
// ---------------------------------------------------------------------------

pub static CONTACT_INFO: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)\b(contact|email|phone|address)\b"));

pub static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| re(r"\+?\d[\d\s().-]{7,}\d"));

pub static PHYSICAL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)\d+\s+[a-z]+\s+(street|st\.|avenue|ave\.|road|rd\.|boulevard|blvd|suite|floor)")
});

pub static CONTACT_PAGE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)contact\s+(us|page|form)"));

/// Distinct contact channels found on a scraped page
pub fn contact_channel_count(text: &str) -> usize {
    [
        EMAIL.is_match(text),
        PHONE_NUMBER.is_match(text),
        PHYSICAL_ADDRESS.is_match(text),
        CONTACT_PAGE.is_match(text),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}
