use std::collections::HashMap;

const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    // Networking
    ("Networking", &["network", "connectivity", "connection", "internet", "lan", "wan"]),
    ("VPN_Troubleshooting", &["vpn", "remote", "tunnel", "authentication", "dropped", "disconnection"]),
    ("Network_Security", &["security", "firewall", "intrusion", "attack", "breach"]),
    ("Network_Monitoring", &["monitoring", "performance", "bandwidth", "latency"]),
    ("Switch_Configuration", &["switch", "vlan", "port", "configuration"]),
    ("Routing_Protocols", &["routing", "protocol", "gateway", "route"]),
    ("Cisco_IOS", &["cisco", "ios", "router", "switch"]),
    ("DNS_Configuration", &["dns", "domain", "resolution", "nslookup"]),
    ("Network_Cabling", &["cable", "ethernet", "physical", "wiring"]),
    // Security
    ("Endpoint_Security", &["endpoint", "malware", "virus", "protection"]),
    ("Antivirus_Malware", &["antivirus", "malware", "virus", "threat", "infection"]),
    ("Phishing_Analysis", &["phishing", "email", "suspicious", "spam", "impersonating"]),
    ("Security_Audits", &["audit", "compliance", "security", "policy"]),
    ("SIEM_Logging", &["logging", "log", "siem", "monitoring", "events"]),
    ("Identity_Management", &["identity", "access", "permissions", "group"]),
    ("Firewall_Configuration", &["firewall", "port", "rule", "block", "allow"]),
    // Windows / Microsoft
    ("Windows_Server_2022", &["windows", "server", "2022", "domain"]),
    ("Active_Directory", &["active directory", "ad", "domain", "login", "authentication", "account", "user", "sso"]),
    ("Microsoft_365", &["microsoft", "365", "office", "outlook", "email", "teams"]),
    ("SharePoint_Online", &["sharepoint", "collaboration", "document", "site"]),
    ("PowerShell_Scripting", &["powershell", "script", "automation", "cmdlet"]),
    ("Endpoint_Management", &["endpoint", "device", "management", "policy"]),
    ("Windows_OS", &["windows", "desktop", "workstation", "pc"]),
    // Hardware
    ("Hardware_Diagnostics", &["hardware", "diagnostic", "component", "failure", "repair"]),
    ("Laptop_Repair", &["laptop", "notebook", "portable", "mobile", "boot", "repair"]),
    ("Printer_Troubleshooting", &["printer", "print", "queue", "toner", "paper"]),
    // Database
    ("Database_SQL", &["database", "sql", "query", "table", "performance", "slow"]),
    ("ETL_Processes", &["etl", "data", "extract", "transform", "load"]),
    ("Data_Warehousing", &["warehouse", "data", "analytics", "reporting"]),
    ("PowerBI_Tableau", &["powerbi", "tableau", "visualization", "dashboard"]),
    // Cloud
    ("Cloud_AWS", &["aws", "amazon", "cloud", "ec2", "s3"]),
    ("Cloud_Azure", &["azure", "microsoft", "cloud", "app service", "website"]),
    ("DevOps_CI_CD", &["devops", "jenkins", "ci", "cd", "deployment", "build"]),
    ("Kubernetes_Docker", &["kubernetes", "docker", "container", "orchestration"]),
    // Linux / Unix
    ("Linux_Administration", &["linux", "unix", "server", "permission", "chmod", "directory"]),
    ("Mac_OS", &["mac", "macos", "apple", "macbook", "samba"]),
    // Programming
    ("Python_Scripting", &["python", "script", "automation", "code"]),
    // Integration / API
    ("SaaS_Integrations", &["saas", "integration", "api", "third-party"]),
    ("API_Troubleshooting", &["api", "rest", "web service", "integration"]),
    ("Web_Server_Apache_Nginx", &["web server", "apache", "nginx", "http"]),
    ("SSL_Certificates", &["ssl", "certificate", "https", "encryption"]),
    // VoIP / Communication
    ("Voice_VoIP", &["voice", "voip", "phone", "calling", "sip"]),
    // Virtualization
    ("Virtualization_VMware", &["vmware", "virtual", "vm", "hypervisor"]),
    // Licensing
    ("Software_Licensing", &["license", "software", "activation", "key"]),
];

/// Keyword vocabulary keyed by skill identifier. Skills missing from the
/// table still participate in matching through their own name words.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    keywords: HashMap<&'static str, &'static [&'static str]>,
}

impl SkillLexicon {
    /// The built-in helpdesk vocabulary.
    pub fn standard() -> Self {
        Self::with_entries(SKILL_KEYWORDS)
    }

    pub fn with_entries(entries: &[(&'static str, &'static [&'static str])]) -> Self {
        let mut keywords = HashMap::with_capacity(entries.len());
        for (skill, words) in entries {
            keywords.insert(*skill, *words);
        }
        Self { keywords }
    }

    pub fn keywords_for(&self, skill: &str) -> &[&'static str] {
        self.keywords.get(skill).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

const LINUX_TERMS: &[&str] = &["linux", "unix", "chmod", "directory permissions"];
const WINDOWS_TERMS: &[&str] = &["windows", "active directory", "outlook", "microsoft"];
const MAC_TERMS: &[&str] = &["mac", "macos", "macbook", "samba"];
const SECURITY_TERMS: &[&str] = &["security", "phishing", "attack", "breach", "locked", "suspicious"];
const HARDWARE_TERMS: &[&str] = &["laptop", "hardware", "boot", "printer", "diagnostic"];
const NETWORK_TERMS: &[&str] = &["network", "vpn", "connection", "firewall", "dns"];
const DATABASE_TERMS: &[&str] = &["database", "sql", "query", "performance", "slow"];
const CLOUD_TERMS: &[&str] = &["azure", "aws", "cloud", "website", "app service"];

/// Platform and category signals detected in one ticket's combined text.
/// Feeds the domain boost/penalty chain in skill scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainSignals {
    pub linux: bool,
    pub windows: bool,
    pub mac: bool,
    pub security: bool,
    pub hardware: bool,
    pub network: bool,
    pub database: bool,
    pub cloud: bool,
}

impl DomainSignals {
    /// Classifies lowercased ticket text. Every predicate is whole-word so
    /// `macbook` cannot light up a `mac` match through `machine`.
    pub fn classify(text: &str) -> Self {
        Self {
            linux: contains_any_word(text, LINUX_TERMS),
            windows: contains_any_word(text, WINDOWS_TERMS),
            mac: contains_any_word(text, MAC_TERMS),
            security: contains_any_word(text, SECURITY_TERMS),
            hardware: contains_any_word(text, HARDWARE_TERMS),
            network: contains_any_word(text, NETWORK_TERMS),
            database: contains_any_word(text, DATABASE_TERMS),
            cloud: contains_any_word(text, CLOUD_TERMS),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word containment: an occurrence counts only when it is not flanked
/// by a word character on either side.
pub(crate) fn contains_word(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    for (begin, matched) in text.match_indices(term) {
        let end = begin + matched.len();
        let left_bounded = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let right_bounded = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
        if left_bounded && right_bounded {
            return true;
        }
    }

    false
}

fn contains_any_word(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_word(text, term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lexicon_covers_the_helpdesk_catalog() {
        let lexicon = SkillLexicon::standard();
        assert_eq!(lexicon.len(), 44);
        assert_eq!(
            lexicon.keywords_for("VPN_Troubleshooting"),
            ["vpn", "remote", "tunnel", "authentication", "dropped", "disconnection"]
        );
        assert!(lexicon.keywords_for("Interpretive_Dance").is_empty());
    }

    #[test]
    fn word_boundaries_reject_embedded_terms() {
        assert!(contains_word("the mac mini will not start", "mac"));
        assert!(!contains_word("the machine will not start", "mac"));
        assert!(!contains_word("painting the windowsill", "windows"));
        assert!(contains_word("windows 11 update loop", "windows"));
    }

    #[test]
    fn multi_word_terms_match_across_spaces() {
        assert!(contains_word("user reports active directory lockout", "active directory"));
        assert!(!contains_word("radioactive directory listing", "active directory"));
    }

    #[test]
    fn classify_flags_multiple_domains_at_once() {
        let signals = DomainSignals::classify("vpn breach on the linux server");
        assert!(signals.network);
        assert!(signals.security);
        assert!(signals.linux);
        assert!(!signals.windows);
        assert!(!signals.mac);
    }

    #[test]
    fn classify_ignores_partial_words() {
        let signals = DomainSignals::classify("the macro in this spreadsheet is broken");
        assert_eq!(signals, DomainSignals::default());
    }
}
