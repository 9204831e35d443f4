//! Fixed word lists used by the tokenizer, scorer and recommendation pass.
//!
//! All lists are lower-case and process-wide constants. Matching against them
//! is plain substring / set membership after lower-casing.

/// Common English function words dropped from job keywords.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by",
    "can", "could", "did", "does", "each", "for", "from", "had", "has", "have",
    "into", "its", "just", "more", "most", "must", "not", "only", "other", "our",
    "should", "some", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "what", "when", "where", "which", "who", "will", "with",
    "would", "you", "your", "was", "were", "also", "any", "all", "how",
];

/// Recognised technology and skill terms, single words and phrases.
///
/// Order matters only for determinism of iteration; reported terms are ordered
/// by where they first appear in the job description.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "nosql",
    "postgresql",
    "mongodb",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "ci/cd",
    "git",
    "linux",
    "rust",
    "golang",
    "scala",
    "kotlin",
    "swift",
    "html",
    "css",
    "django",
    "flask",
    "spring",
    "graphql",
    "rest api",
    "microservices",
    "machine learning",
    "deep learning",
    "data analysis",
    "tensorflow",
    "pytorch",
    "pandas",
    "spark",
    "kafka",
    "agile",
];

/// Résumé action verbs credited when they appear in the experience section.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "analyzed",
    "automated",
    "built",
    "collaborated",
    "created",
    "delivered",
    "designed",
    "developed",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "optimized",
    "reduced",
];

/// Outcome words that count as a quantified achievement on their own.
pub const IMPACT_WORDS: &[&str] = &["increased", "decreased", "improved", "reduced"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn is_tech_skill(term: &str) -> bool {
    TECH_SKILLS.contains(&term)
}
