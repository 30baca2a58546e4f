// Preset vectors - well-known vulnerability classes with reference vectors
//
// Scores are always computed live from the vector, never stored, so the
// catalog cannot drift from the calculator.

/// A named example vector
#[derive(Debug, Clone, Copy)]
pub struct VectorPreset {
    /// Short identifier, usable for lookup
    pub name: &'static str,
    /// CVE id when the preset describes a concrete vulnerability
    pub cve: Option<&'static str>,
    /// CVSS v3.1 vector in canonical form
    pub vector: &'static str,
    pub description: &'static str,
}

/// Built-in example vectors, ordered from most to least severe
pub const PRESETS: &[VectorPreset] = &[
    VectorPreset {
        name: "log4shell",
        cve: Some("CVE-2021-44228"),
        vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H",
        description: "Log4j JNDI lookup remote code execution",
    },
    VectorPreset {
        name: "sql-injection",
        cve: Some("CVE-2017-8917"),
        vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        description: "Unauthenticated SQL injection reaching the full database",
    },
    VectorPreset {
        name: "local-privilege-escalation",
        cve: None,
        vector: "CVSS:3.1/AV:L/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H",
        description: "Local user gains full control of the host",
    },
    VectorPreset {
        name: "heartbleed",
        cve: Some("CVE-2014-0160"),
        vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N",
        description: "OpenSSL heartbeat extension memory disclosure",
    },
    VectorPreset {
        name: "stored-xss",
        cve: None,
        vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:R/S:C/C:L/I:L/A:N",
        description: "Persistent cross-site scripting in a web application",
    },
    VectorPreset {
        name: "info-disclosure",
        cve: None,
        vector: "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:L/I:N/A:N",
        description: "Unauthenticated read access to non-sensitive data",
    },
    VectorPreset {
        name: "poodle",
        cve: Some("CVE-2014-3566"),
        vector: "CVSS:3.1/AV:N/AC:H/PR:N/UI:R/S:C/C:L/I:N/A:N",
        description: "SSLv3 CBC padding oracle downgrade attack",
    },
];

/// Look up a preset by name, ignoring case
pub fn find(name: &str) -> Option<&'static VectorPreset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
