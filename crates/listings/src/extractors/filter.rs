// ABOUTME: Inclusion rules deciding whether an anchor is a listing link.
// ABOUTME: Six independent predicates in two tiers; the first rule that holds admits the anchor.

use std::fmt;

use crate::extractors::anchors::AnchorCandidate;
use crate::options::ExtractOptions;
use crate::patterns::is_recruitment_text;

/// Targets with these endings are treated as downloadable notices.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

/// One predicate of the inclusion filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InclusionRule {
    /// Link text carries a recruitment keyword.
    KeywordText,
    /// Link text mentions the site's brand term.
    BrandText,
    /// Target ends with a document extension.
    DocumentExtension,
    /// Target points into an uploads tree (`wp-content`).
    WpContentTarget,
    /// Target mentions `recruit`.
    RecruitTarget,
    /// Target mentions `notification`.
    NotificationTarget,
}

/// Rules checked first, against text and target.
pub const PRIMARY_RULES: &[InclusionRule] = &[
    InclusionRule::KeywordText,
    InclusionRule::BrandText,
    InclusionRule::DocumentExtension,
];

/// Rules checked only when no primary rule holds, against the target alone.
pub const SECONDARY_RULES: &[InclusionRule] = &[
    InclusionRule::WpContentTarget,
    InclusionRule::RecruitTarget,
    InclusionRule::NotificationTarget,
];

impl InclusionRule {
    /// Number of rules.
    pub const COUNT: usize = 6;

    /// Position of this rule in [`InclusionRule::all`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Every rule, primary tier first.
    pub fn all() -> impl Iterator<Item = InclusionRule> {
        PRIMARY_RULES.iter().chain(SECONDARY_RULES).copied()
    }

    /// Evaluates this rule for an anchor's text and raw target.
    ///
    /// The text rules read the anchor's own visible text, never the placeholder
    /// title. A placeholder would satisfy them for every text-less anchor, so an
    /// image-only link is admitted only through its target.
    pub fn holds(self, anchor: &AnchorCandidate<'_>, opts: &ExtractOptions) -> bool {
        let text = anchor.visible_text.as_str();
        let target = anchor.raw_target;
        match self {
            InclusionRule::KeywordText => is_recruitment_text(text),
            InclusionRule::BrandText => {
                !opts.brand_term.is_empty()
                    && text
                        .to_lowercase()
                        .contains(&opts.brand_term.to_lowercase())
            }
            InclusionRule::DocumentExtension => has_document_extension(target),
            InclusionRule::WpContentTarget => target.contains("wp-content"),
            InclusionRule::RecruitTarget => target.to_lowercase().contains("recruit"),
            InclusionRule::NotificationTarget => target.to_lowercase().contains("notification"),
        }
    }
}

impl fmt::Display for InclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InclusionRule::KeywordText => "keyword text",
            InclusionRule::BrandText => "brand text",
            InclusionRule::DocumentExtension => "document extension",
            InclusionRule::WpContentTarget => "wp-content target",
            InclusionRule::RecruitTarget => "recruit target",
            InclusionRule::NotificationTarget => "notification target",
        };
        write!(f, "{}", s)
    }
}

/// True when the lowercased target ends with `.pdf`, `.doc` or `.docx`.
pub fn has_document_extension(target: &str) -> bool {
    let lower = target.to_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Returns the rule that admits `anchor`, or `None` if it is not a listing.
pub fn admit(anchor: &AnchorCandidate<'_>, opts: &ExtractOptions) -> Option<InclusionRule> {
    InclusionRule::all().find(|rule| rule.holds(anchor, opts))
}
