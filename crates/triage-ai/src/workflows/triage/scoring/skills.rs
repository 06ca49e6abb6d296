use super::super::domain::Agent;
use super::super::lexicon::{DomainSignals, SkillLexicon};

const WINDOWS_SKILL_TERMS: &[&str] = &["Windows", "Active_Directory", "Microsoft"];
const SECURITY_SKILL_TERMS: &[&str] = &["Security", "Phishing", "Antivirus", "Firewall"];
const HARDWARE_SKILL_TERMS: &[&str] = &["Hardware", "Laptop", "Printer"];
const NETWORK_SKILL_TERMS: &[&str] = &["Network", "VPN", "DNS", "Routing"];
const CLOUD_SKILL_TERMS: &[&str] = &["Cloud", "Azure", "AWS", "DevOps"];

pub(crate) struct SkillMatch {
    pub(crate) score: f64,
    pub(crate) matched_skills: Vec<String>,
}

/// Scores how well an agent's skill set covers a ticket. Each skill tallies
/// keyword hits, is weighted by proficiency and the domain multiplier, and
/// the summed total is normalized by the square root of the skill count so
/// broad generalists do not eclipse focused specialists.
pub(crate) fn score_skills(
    ticket_text: &str,
    ticket_keywords: &[String],
    agent: &Agent,
    lexicon: &SkillLexicon,
) -> SkillMatch {
    let signals = DomainSignals::classify(ticket_text);

    let mut total = 0.0;
    let mut matched_skills = Vec::new();

    for (skill, level) in &agent.skills {
        let keywords = lexicon.keywords_for(skill);
        let mut hits: u32 = 0;

        // Verbatim keyword phrases anywhere in the text weigh the most.
        for &keyword in keywords {
            if ticket_text.contains(keyword) {
                hits += 3;
            }
        }

        // Token-level comparison against every extracted ticket keyword.
        for &keyword in keywords {
            for ticket_keyword in ticket_keywords {
                if keyword == ticket_keyword {
                    hits += 2;
                } else if ticket_keyword.contains(keyword) || keyword.contains(ticket_keyword.as_str())
                {
                    hits += 1;
                }
            }
        }

        // The skill's own name words count even without a lexicon entry.
        let skill_name = skill.to_lowercase().replace('_', " ");
        for skill_word in skill_name.split_whitespace() {
            if ticket_keywords.iter().any(|keyword| keyword == skill_word) {
                hits += 2;
            }
        }

        if hits > 0 {
            total += f64::from(hits) * f64::from(*level) * domain_multiplier(skill, signals);
            matched_skills.push(skill.clone());
        }
    }

    let score = if agent.skills.is_empty() {
        0.0
    } else {
        total / (agent.skills.len() as f64).sqrt()
    };

    SkillMatch {
        score,
        matched_skills,
    }
}

/// Boost or penalty from pairing a skill's platform with the ticket's
/// detected domains. The chain is ordered; the first matching rule wins and
/// later domains are not consulted for that skill.
fn domain_multiplier(skill: &str, signals: DomainSignals) -> f64 {
    let windows_skill = skill_mentions(skill, WINDOWS_SKILL_TERMS);

    if skill.contains("Linux") && signals.linux {
        2.0
    } else if skill.contains("Linux") && signals.windows {
        0.3
    } else if windows_skill && signals.windows {
        2.0
    } else if windows_skill && signals.linux {
        0.3
    } else if skill.contains("Mac") && signals.mac {
        2.0
    } else if skill_mentions(skill, SECURITY_SKILL_TERMS) && signals.security {
        1.8
    } else if skill_mentions(skill, HARDWARE_SKILL_TERMS) && signals.hardware {
        1.8
    } else if skill_mentions(skill, NETWORK_SKILL_TERMS) && signals.network {
        1.8
    } else if skill.contains("Database") && signals.database {
        2.0
    } else if skill_mentions(skill, CLOUD_SKILL_TERMS) && signals.cloud {
        1.8
    } else {
        1.0
    }
}

fn skill_mentions(skill: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| skill.contains(term))
}
