//! Random `_redirects` file generation for benchmarking and testing.
//!
//! Output is built line by line from a fixed vocabulary so every generated
//! file parses without errors.

use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating `_redirects` files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of comment lines to generate.
    pub num_comments: usize,
    /// Maximum parameter fields per rule (0 disables parameters).
    pub max_params_per_rule: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_params_per_rule: 3,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional comments.
    ///
    /// Comments are set to ~20% of rules (minimum 0).
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    ///
    /// Note: Actual size varies with the generated paths and parameters.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~45 bytes
        Self::new(bytes.saturating_div(45).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum parameters per rule.
    pub fn with_max_params(mut self, max: usize) -> Self {
        self.max_params_per_rule = max;
        self
    }
}

/// Vocabulary for generating realistic rules.
mod vocabulary {
    pub const FROM_TEMPLATES: &[&str] = &[
        "/{dir}",
        "/{dir}/*",
        "/{dir}/:slug",
        "/{dir}/{page}.html",
        "/{dir}/{page}",
        "/*",
    ];
    pub const TO_TEMPLATES: &[&str] = &[
        "/",
        "/{dir}",
        "/{dir}/:splat",
        "/{dir}/{page}",
        "/index.html",
        "https://{host}/:splat",
        "https://{host}/{dir}",
    ];
    pub const DIRECTORIES: &[&str] = &["blog", "news", "docs", "api", "app", "shop", "about"];
    pub const PAGES: &[&str] = &["index", "my-post", "pricing", "contact", "legacy"];
    pub const HOSTS: &[&str] = &["api.example.com", "www.example.com", "cdn.example.net"];
    pub const STATUSES: &[&str] = &["301", "302", "200", "404", "200!", "301!", "410"];
    pub const PARAM_KEYS: &[&str] = &["Country", "Language", "Role", "foo", "query"];
    pub const PARAM_VALUES: &[&str] = &["us", "en", "admin", "bar", "id=:id"];
    pub const SECTION_NAMES: &[&str] = &["Redirects", "Rewrites", "Proxies", "Legacy paths"];
}

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

/// Probability that a rule omits its status field (percentage).
const IMPLICIT_STATUS_PROBABILITY: u32 = 30;

/// Probability that a parameter is a bare flag (percentage).
const FLAG_PROBABILITY: u32 = 25;

fn pick<'a>(rng: &mut StdRng, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

fn fill(rng: &mut StdRng, template: &str) -> String {
    use vocabulary::*;

    template
        .replace("{dir}", pick(rng, DIRECTORIES))
        .replace("{page}", pick(rng, PAGES))
        .replace("{host}", pick(rng, HOSTS))
}

/// Generates the fields of a single rule line.
fn generate_rule(rng: &mut StdRng, config: &GeneratorConfig) -> Vec<String> {
    use vocabulary::*;

    let from_template = pick(rng, FROM_TEMPLATES);
    let from = fill(rng, from_template);
    let to_template = pick(rng, TO_TEMPLATES);
    let to = fill(rng, to_template);
    let mut fields = vec![from, to];

    let num_params = if config.max_params_per_rule == 0 {
        0
    } else {
        rng.random_range(0..=config.max_params_per_rule)
    };

    // Parameters need a status field in front of them
    if num_params > 0 || !rng.random_ratio(IMPLICIT_STATUS_PROBABILITY, 100) {
        fields.push(pick(rng, STATUSES).to_string());
    }

    for _ in 0..num_params {
        let key = pick(rng, PARAM_KEYS);
        if rng.random_ratio(FLAG_PROBABILITY, 100) {
            fields.push(key.to_string());
        } else {
            fields.push(format!("{}={}", key, pick(rng, PARAM_VALUES)));
        }
    }

    fields
}

/// Generates a `_redirects` file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out = String::with_capacity(config.num_rules * 45 + 64);

    // Header comment
    out.push_str("# Auto-generated _redirects for benchmarking\n\n");

    let mut rules_added = 0;
    let mut comments_added = 0;

    // Generate rules, interspersing comments
    while rules_added < config.num_rules {
        // Maybe add a section comment
        if comments_added < config.num_comments
            && rules_added > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            let section = pick(&mut rng, SECTION_NAMES);
            out.push_str(&format!("\n# {} section\n", section));
            comments_added += 1;
        }

        let fields = generate_rule(&mut rng, config);
        out.push_str(&fields.join("  "));
        out.push('\n');
        rules_added += 1;
    }

    out
}
