//! Static code taxonomies for the land-tenure vocabularies.
//!
//! The upstream registry speaks a large raw vocabulary of status, purpose and
//! office codes; the portal presents a much smaller public-facing one. These
//! tables map each public code to the raw values it represents and carry the
//! display strings for listings and exports. The tables are versioned with
//! the release; an upstream vocabulary change requires a change here.
use std::str::FromStr;

use thiserror::Error;

/// A taxonomy selector for [`code_groups`] and the lookup helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeType {
    Status,
    Reason,
    Region,
    Purpose,
    LandUseType,
    Comment,
}

/// Error returned when a taxonomy name from an external boundary does not
/// correspond to any known [`CodeType`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown code type: {0}")]
pub struct UnknownCodeType(pub String);

impl FromStr for CodeType {
    type Err = UnknownCodeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STATUS" => Ok(CodeType::Status),
            "REASON" => Ok(CodeType::Reason),
            "REGION" => Ok(CodeType::Region),
            "PURPOSE" => Ok(CodeType::Purpose),
            "LANDUSETYPE" => Ok(CodeType::LandUseType),
            "COMMENT" => Ok(CodeType::Comment),
            other => Err(UnknownCodeType(other.to_string())),
        }
    }
}

/// One entry of a taxonomy: the public code, its URL-safe alias, display
/// strings, and the raw upstream values it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeGroup {
    pub code: &'static str,
    pub param: &'static str,
    pub text_long: &'static str,
    pub text_short: &'static str,
    pub mapped_codes: &'static [&'static str],
}

/// Public application status codes.
pub mod status {
    pub const ABANDONED: &str = "ABANDONED";
    pub const APPLICATION_UNDER_REVIEW: &str = "APPLICATION UNDER REVIEW";
    pub const APPLICATION_REVIEW_COMPLETE: &str = "APPLICATION REVIEW COMPLETE";
    pub const DECISION_APPROVED: &str = "DECISION APPROVED";
    pub const DECISION_NOT_APPROVED: &str = "DECISION NOT APPROVED";
    pub const UNKNOWN: &str = "UNKNOWN";
}

/// Raw reason codes that mark an "abandoned" record as an amendment outcome.
pub mod reason {
    pub const AMENDMENT_APPROVED: &str = "AMENDMENT APPROVED - APPLICATION";
    pub const AMENDMENT_NOT_APPROVED: &str = "AMENDMENT NOT APPROVED - APPLICATION";
}

/// Comment period status codes.
pub mod comment {
    pub const NOT_STARTED: &str = "NOT STARTED";
    pub const OPEN: &str = "OPEN";
    pub const CLOSED: &str = "CLOSED";
}

static STATUS_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        code: status::ABANDONED,
        param: "AB",
        text_long: "Abandoned",
        text_short: "Abandoned",
        mapped_codes: &[
            "ABANDONED",
            "CANCELLED",
            "OFFER NOT ACCEPTED",
            "OFFER RESCINDED",
            "RETURNED",
            "REVERTED",
            "SUSPENDED",
            "WITHDRAWN",
        ],
    },
    CodeGroup {
        code: status::APPLICATION_UNDER_REVIEW,
        param: "AUR",
        text_long: "Application Under Review",
        text_short: "Under Review",
        mapped_codes: &["ACCEPTED", "ALLOWED", "PENDING", "RECEIVED"],
    },
    CodeGroup {
        code: status::APPLICATION_REVIEW_COMPLETE,
        param: "ARC",
        text_long: "Application Review Complete - Decision Pending",
        text_short: "Decision Pending",
        mapped_codes: &["OFFER ACCEPTED", "OFFERED"],
    },
    CodeGroup {
        code: status::DECISION_APPROVED,
        param: "DA",
        text_long: "Decision: Approved - Tenure Issued",
        text_short: "Approved",
        mapped_codes: &["DISPOSITION IN GOOD STANDING"],
    },
    CodeGroup {
        code: status::DECISION_NOT_APPROVED,
        param: "DN",
        text_long: "Decision: Not Approved",
        text_short: "Not Approved",
        mapped_codes: &["DISALLOWED"],
    },
    CodeGroup {
        code: status::UNKNOWN,
        param: "UN",
        text_long: "Unknown Status",
        text_short: "Unknown",
        mapped_codes: &["NOT USED", "PRE-TANTALIS"],
    },
];

// Reason entries borrow their display text from the matching decision status.
static REASON_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        code: reason::AMENDMENT_APPROVED,
        param: "AA",
        text_long: "Decision: Approved - Tenure Issued",
        text_short: "Approved",
        mapped_codes: &[reason::AMENDMENT_APPROVED],
    },
    CodeGroup {
        code: reason::AMENDMENT_NOT_APPROVED,
        param: "AN",
        text_long: "Decision: Not Approved",
        text_short: "Not Approved",
        mapped_codes: &[reason::AMENDMENT_NOT_APPROVED],
    },
];

static REGION_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        code: "CA - LAND MGMNT - CARIBOO FIELD OFFICE",
        param: "CA",
        text_long: "Cariboo, Williams Lake",
        text_short: "Cariboo",
        mapped_codes: &["CA - LAND MGMNT - CARIBOO FIELD OFFICE"],
    },
    CodeGroup {
        code: "KO - LAND MGMNT - KOOTENAY FIELD OFFICE",
        param: "KO",
        text_long: "Kootenay, Cranbrook",
        text_short: "Kootenay",
        mapped_codes: &["KO - LAND MGMNT - KOOTENAY FIELD OFFICE"],
    },
    CodeGroup {
        code: "LM - LAND MGMNT - LOWER MAINLAND SERVICE REGION",
        param: "LM",
        text_long: "Lower Mainland, Surrey",
        text_short: "Lower Mainland",
        mapped_codes: &["LM - LAND MGMNT - LOWER MAINLAND SERVICE REGION"],
    },
    CodeGroup {
        code: "OM - LAND MGMNT - NORTHERN SERVICE REGION",
        param: "OM",
        text_long: "Omineca, Prince George",
        text_short: "Omineca",
        mapped_codes: &["OM - LAND MGMNT - NORTHERN SERVICE REGION"],
    },
    CodeGroup {
        code: "PE - LAND MGMNT - PEACE FIELD OFFICE",
        param: "PE",
        text_long: "Peace, Fort St. John",
        text_short: "Peace",
        mapped_codes: &["PE - LAND MGMNT - PEACE FIELD OFFICE"],
    },
    CodeGroup {
        code: "SK - LAND MGMNT - SKEENA FIELD OFFICE",
        param: "SK",
        text_long: "Skeena, Smithers",
        text_short: "Skeena",
        mapped_codes: &["SK - LAND MGMNT - SKEENA FIELD OFFICE"],
    },
    CodeGroup {
        code: "SI - LAND MGMNT - SOUTHERN SERVICE REGION",
        param: "SI",
        text_long: "Thompson Okanagan, Kamloops",
        text_short: "Thompson Okanagan",
        mapped_codes: &["SI - LAND MGMNT - SOUTHERN SERVICE REGION"],
    },
    CodeGroup {
        code: "VI - LAND MGMNT - VANCOUVER ISLAND SERVICE REGION",
        param: "VI",
        text_long: "West Coast, Nanaimo",
        text_short: "West Coast",
        mapped_codes: &["VI - LAND MGMNT - VANCOUVER ISLAND SERVICE REGION"],
    },
];

macro_rules! purpose_group {
    ($code:expr, $param:expr, $text:expr) => {
        CodeGroup {
            code: $code,
            param: $param,
            text_long: $text,
            text_short: $text,
            mapped_codes: &[$code],
        }
    };
}

static PURPOSE_GROUPS: &[CodeGroup] = &[
    purpose_group!("AGRICULTURE", "agriculture", "Agriculture"),
    purpose_group!("ALL SEASONS RESORT", "all-seasons-resort", "All Seasons Resort"),
    purpose_group!("ALPINE SKIING", "alpine-skiing", "Alpine Skiing"),
    purpose_group!("AQUACULTURE", "aquaculture", "Aquaculture"),
    purpose_group!("COMMERCIAL", "commercial", "Commercial"),
    purpose_group!(
        "COMMERCIAL RECREATION",
        "commercial-recreation",
        "Commercial Recreation"
    ),
    purpose_group!("COMMUNICATION", "communication", "Communication"),
    purpose_group!("COMMUNITY", "community", "Community"),
    purpose_group!("ENERGY PRODUCTION", "energy-production", "Energy Production"),
    purpose_group!(
        "ENVIRONMENT CONSERV & RECR",
        "environment",
        "Environment, Conservation & Recreation"
    ),
    purpose_group!("FIRST NATIONS", "first-nations", "First Nations"),
    purpose_group!("INDUSTRIAL", "industrial", "Industrial"),
    purpose_group!("INSTITUTIONAL", "institutional", "Institutional"),
    purpose_group!(
        "MISCELLANEOUS LAND USES",
        "miscellaneous",
        "Miscellaneous Land Uses"
    ),
    purpose_group!("OCEAN ENERGY", "ocean-energy", "Ocean Energy"),
    purpose_group!("QUARRYING", "quarrying", "Quarrying"),
    purpose_group!("RESIDENTIAL", "residential", "Residential"),
    purpose_group!("SOLAR POWER", "solar-power", "Solar Power"),
    purpose_group!("TRANSPORTATION", "transportation", "Transportation"),
    purpose_group!("UTILITY", "utility", "Utility"),
    purpose_group!("WATERPOWER", "waterpower", "Waterpower"),
    purpose_group!("WINDPOWER", "windpower", "Windpower"),
];

static LAND_USE_TYPE_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        code: "CROWN GRANT",
        param: "crown-grant",
        text_long: "Crown Grant",
        text_short: "Crown Grant",
        mapped_codes: &["CROWN GRANT"],
    },
    CodeGroup {
        code: "LEASE",
        param: "lease",
        text_long: "Lease",
        text_short: "Lease",
        mapped_codes: &["LEASE"],
    },
    CodeGroup {
        code: "LICENCE",
        param: "licence",
        text_long: "Licence of Occupation",
        text_short: "Licence",
        mapped_codes: &["LICENCE"],
    },
    CodeGroup {
        code: "PERMIT",
        param: "permit",
        text_long: "Permit",
        text_short: "Permit",
        mapped_codes: &["PERMIT"],
    },
    CodeGroup {
        code: "RESERVE/NOTATION",
        param: "reserve-notation",
        text_long: "Reserve or Notation",
        text_short: "Reserve/Notation",
        mapped_codes: &["RESERVE/NOTATION"],
    },
    CodeGroup {
        code: "RIGHT-OF-WAY",
        param: "right-of-way",
        text_long: "Statutory Right-of-Way",
        text_short: "Right-of-Way",
        mapped_codes: &["RIGHT-OF-WAY"],
    },
];

static COMMENT_GROUPS: &[CodeGroup] = &[
    CodeGroup {
        code: comment::NOT_STARTED,
        param: "NS",
        text_long: "Commenting Not Started",
        text_short: "Not Started",
        mapped_codes: &[comment::NOT_STARTED],
    },
    CodeGroup {
        code: comment::OPEN,
        param: "O",
        text_long: "Commenting Open",
        text_short: "Open",
        mapped_codes: &[comment::OPEN],
    },
    CodeGroup {
        code: comment::CLOSED,
        param: "C",
        text_long: "Commenting Closed",
        text_short: "Closed",
        mapped_codes: &[comment::CLOSED],
    },
];

/// Returns the fixed enumeration for a taxonomy.
pub fn code_groups(code_type: CodeType) -> &'static [CodeGroup] {
    match code_type {
        CodeType::Status => STATUS_GROUPS,
        CodeType::Reason => REASON_GROUPS,
        CodeType::Region => REGION_GROUPS,
        CodeType::Purpose => PURPOSE_GROUPS,
        CodeType::LandUseType => LAND_USE_TYPE_GROUPS,
        CodeType::Comment => COMMENT_GROUPS,
    }
}

/// Matches `search` against every group's code, param and display strings.
/// Matching is case-sensitive and exact; the first match in table order wins.
/// An empty search never matches.
pub fn find_code_group(code_type: CodeType, search: &str) -> Option<&'static CodeGroup> {
    if search.is_empty() {
        return None;
    }
    code_groups(code_type).iter().find(|group| {
        group.code == search
            || group.param == search
            || group.text_long == search
            || group.text_short == search
    })
}

/// The public code for a matching group.
pub fn code(code_type: CodeType, search: &str) -> Option<&'static str> {
    find_code_group(code_type, search).map(|group| group.code)
}

/// The URL-safe alias for a matching group.
pub fn param(code_type: CodeType, search: &str) -> Option<&'static str> {
    find_code_group(code_type, search).map(|group| group.param)
}

/// The short display string for a matching group.
pub fn text_short(code_type: CodeType, search: &str) -> Option<&'static str> {
    find_code_group(code_type, search).map(|group| group.text_short)
}

/// The long display string for a matching group.
pub fn text_long(code_type: CodeType, search: &str) -> Option<&'static str> {
    find_code_group(code_type, search).map(|group| group.text_long)
}

/// The raw upstream values a matching group stands for.
pub fn mapped_codes(code_type: CodeType, search: &str) -> Option<&'static [&'static str]> {
    find_code_group(code_type, search).map(|group| group.mapped_codes)
}

/// Reverse lookup: the public status group a raw upstream status belongs to.
pub fn group_for_raw_status(raw: &str) -> Option<&'static CodeGroup> {
    STATUS_GROUPS
        .iter()
        .find(|group| group.mapped_codes.contains(&raw))
}
