// Fixed tables behind the quiz → search query expansion and the ranking filter.

/// Quiz `interests` option → descriptive search phrase.
pub const INTEREST_PHRASES: &[(&str, &str)] = &[
    ("web", "web development, frontend, backend, full stack"),
    ("mobile", "mobile app development, iOS, Android"),
    ("ai", "artificial intelligence, machine learning, deep learning"),
    ("data", "data science, data analytics, big data"),
    ("game", "game development, game design, game engines"),
    ("security", "cybersecurity, information security, network security"),
    ("cloud", "cloud computing, DevOps, infrastructure"),
    ("embedded", "embedded systems, IoT, hardware programming"),
];

/// Quiz `skills` option → descriptive search phrase.
pub const SKILL_PHRASES: &[(&str, &str)] = &[
    ("frontend", "HTML, CSS, JavaScript, React, Angular, Vue"),
    ("backend", "Python, Java, Node.js, PHP, Ruby"),
    ("database", "SQL, NoSQL, MongoDB, PostgreSQL"),
    ("algorithms", "algorithms, data structures, problem solving"),
    ("networking", "networking, security protocols, system administration"),
    ("ui", "UI/UX design, user interface, user experience"),
    ("mobile", "iOS development, Android development, mobile apps"),
    ("ai", "machine learning, neural networks, AI frameworks"),
];

pub const STRENGTHS_SUFFIX: &str = " in technology and programming";
pub const PERSONALITY_SUFFIX: &str = " in a technology environment";

/// Titles every recommendation list starts from, in rank order.
pub const PREFERRED_TITLES: &[&str] = &[
    "Software Developer",
    "Data Scientist",
    "Machine Learning Engineer",
    "DevOps Engineer",
    "Cloud Architect",
    "Cybersecurity Analyst",
    "Full Stack Developer",
    "Mobile App Developer",
    "UI/UX Designer",
    "Game Developer",
    "Blockchain Developer",
    "AI Research Scientist",
    "Systems Administrator",
    "Network Engineer",
    "Database Administrator",
    "Quality Assurance Engineer",
    "Technical Product Manager",
    "IT Project Manager",
    "Robotics Engineer",
    "Computer Vision Engineer",
    "Natural Language Processing Engineer",
    "Embedded Systems Engineer",
    "IoT Solutions Architect",
    "AR/VR Developer",
    "Quantum Computing Engineer",
];

/// A title is in-domain when its lowercase form contains any of these.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "software",
    "programming",
    "developer",
    "engineer",
    "data",
    "security",
    "cloud",
    "devops",
    "ai",
    "machine learning",
    "cyber",
    "web",
    "mobile",
    "computer",
    "information",
    "technology",
    "system",
    "network",
    "database",
    "application",
    "code",
    "digital",
    "technical",
    "robotics",
    "automation",
    "blockchain",
    "quantum",
    "virtual",
    "augmented",
    "reality",
    "iot",
];

/// Table value for `key` (trimmed, case-insensitive), or `key` unchanged.
pub fn expand<'a>(table: &'a [(&'a str, &'a str)], key: &'a str) -> &'a str {
    let needle = key.trim();
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(needle))
        .map(|(_, phrase)| *phrase)
        .unwrap_or(key)
}

pub fn is_in_domain(title: &str) -> bool {
    let lower = title.to_lowercase();
    DOMAIN_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
