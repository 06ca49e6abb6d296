use super::super::domain::Ticket;

const HIGH_URGENCY_TERMS: &[&str] = &[
    "critical",
    "urgent",
    "emergency",
    "down",
    "outage",
    "breach",
    "security",
    "production",
    "business-critical",
    "attack",
    "locked",
    "unreachable",
    "slow performance",
    "phishing",
];

const MEDIUM_URGENCY_TERMS: &[&str] = &[
    "unable",
    "error",
    "problem",
    "issue",
    "failed",
    "not working",
    "access denied",
    "boot",
    "laptop",
];

pub(crate) const BASE_PRIORITY: f64 = 1.0;
pub(crate) const MAX_PRIORITY: f64 = 5.0;

/// Urgency of a ticket from its wording alone: base 1.0, +2.0 per distinct
/// high-urgency term and +1.0 per distinct medium-urgency term found in the
/// title or description, capped at 5.0. Matches are plain case-insensitive
/// substrings; repeated occurrences of one term count once.
pub(crate) fn ticket_priority(ticket: &Ticket) -> f64 {
    let title = ticket.title.to_lowercase();
    let description = ticket.description.to_lowercase();

    let mut priority = BASE_PRIORITY;

    for &term in HIGH_URGENCY_TERMS {
        if title.contains(term) || description.contains(term) {
            priority += 2.0;
        }
    }

    for &term in MEDIUM_URGENCY_TERMS {
        if title.contains(term) || description.contains(term) {
            priority += 1.0;
        }
    }

    priority.min(MAX_PRIORITY)
}
