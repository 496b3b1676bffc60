//! Project Catalog
//!
//! Repositories pulled from the GitHub REST API, and everything the
//! projects sections do with them: exclusion, categorisation, sorting,
//! paging, featured ordering, relative timestamps and fallback copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many cards the projects grid shows before "show all"
pub const PAGE_SIZE: usize = 9;

/// Repositories never shown, regardless of owner settings
pub const DEFAULT_EXCLUDED: &[&str] = &["email-agent-react", "Torch", "torch"];

/// Featured repositories in display order
pub const DEFAULT_FEATURED: &[&str] = &[
    "VisionM",
    "PacMan-RL",
    "email-agent",
    "J.A.R.V.I.S",
    "Sentiment_Analyzer_BigData",
    "Dino_Chrome",
];

const AI_KEYWORDS: &[&str] = &[
    "ml", "ai", "model", "neural", "llm", "deep", "vision", "rl", "jarvis", "cuda", "dl", "crowd",
    "pacman", "agent", "bigdata", "snake", "cv_snake",
];
const WEB_KEYWORDS: &[&str] = &[
    "web",
    "react",
    "next",
    "html",
    "css",
    "movie",
    "animation",
    "card",
    "local",
];
const BACKEND_KEYWORDS: &[&str] = &["api", "server", "backend", "email", "node"];

/// A repository as returned by `GET /users/{user}/repos`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub pushed_at: DateTime<Utc>,
}

impl Repo {
    /// Description from the API, or the curated fallback for this name
    pub fn description_or_fallback(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => fallback_description(&self.name),
        }
    }

    /// Homepage if it is set to something non-empty
    pub fn demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn category(&self) -> Category {
        categorize(self)
    }
}

/// Drop forks and excluded repository names
pub fn filter_repos<S: AsRef<str>>(repos: Vec<Repo>, excluded: &[S]) -> Vec<Repo> {
    repos
        .into_iter()
        .filter(|r| !r.fork && !excluded.iter().any(|e| e.as_ref() == r.name))
        .collect()
}

/// Project category used by the filter bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    AiMl,
    Web,
    Backend,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::Web => "Web",
            Self::Backend => "Backend",
            Self::Other => "Other",
        }
    }
}

/// Keyword categorisation on lowercased name and description
///
/// Substring match; the first category with a hit wins, in the order
/// AI/ML, Web, Backend.
pub fn categorize(repo: &Repo) -> Category {
    let name = repo.name.to_lowercase();
    let desc = repo
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let hit = |kws: &[&str]| kws.iter().any(|kw| name.contains(kw) || desc.contains(kw));

    if hit(AI_KEYWORDS) {
        Category::AiMl
    } else if hit(WEB_KEYWORDS) {
        Category::Web
    } else if hit(BACKEND_KEYWORDS) {
        Category::Backend
    } else {
        Category::Other
    }
}

/// Filter bar selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar entries in display order
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::AiMl),
        CategoryFilter::Only(Category::Web),
        CategoryFilter::Only(Category::Backend),
        CategoryFilter::Only(Category::Other),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, repo: &Repo) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => categorize(repo) == c,
        }
    }
}

/// Sort selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Most recently pushed first
    #[default]
    Updated,
    /// Most starred first
    Stars,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Updated => "Recent",
            Self::Stars => "Stars",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Updated => Self::Stars,
            Self::Stars => Self::Updated,
        }
    }
}

/// View state of the projects grid
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectView {
    filter: CategoryFilter,
    sort: SortOrder,
    show_all: bool,
}

impl ProjectView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    /// Select a filter; collapses the grid back to one page
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.show_all = false;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    /// Sorted and filtered repositories, before paging
    pub fn matching<'a>(&self, repos: &'a [Repo]) -> Vec<&'a Repo> {
        let mut sorted: Vec<&Repo> = repos.iter().collect();
        match self.sort {
            SortOrder::Stars => sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
            SortOrder::Updated => sorted.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at)),
        }
        sorted.retain(|r| self.filter.matches(r));
        sorted
    }

    /// What the grid currently shows
    pub fn visible<'a>(&self, repos: &'a [Repo]) -> Vec<&'a Repo> {
        let mut matching = self.matching(repos);
        if !self.show_all {
            matching.truncate(PAGE_SIZE);
        }
        matching
    }

    /// Whether the "show all" control should be offered, and for how many
    pub fn show_all_offer(&self, repos: &[Repo]) -> Option<usize> {
        let total = self.matching(repos).len();
        (total > PAGE_SIZE && !self.show_all).then_some(total)
    }
}

/// Human "pushed ... ago" label
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - then).num_days();
    if days < 1 {
        "today".to_string()
    } else if days < 30 {
        format!("{days}d ago")
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

/// Featured repositories in the given order; unknown names are skipped
pub fn featured<'a, S: AsRef<str>>(repos: &'a [Repo], order: &[S]) -> Vec<&'a Repo> {
    order
        .iter()
        .filter_map(|name| repos.iter().find(|r| r.name == name.as_ref()))
        .collect()
}

/// Curated description for repositories without one
pub fn fallback_description(name: &str) -> &'static str {
    match name {
        "PacMan-RL" => "Reinforcement learning agent for Pac-Man with Q-learning.",
        "J.A.R.V.I.S" => "AI personal assistant with NLP and automation.",
        "CV_Snake" => "Computer vision Snake game with hand gesture recognition.",
        "DL_Lab" => "Deep learning lab: neural networks, training, optimization.",
        "CVAT_AR" => "Computer vision annotation tool with AR features.",
        "ImageCUDA" => "CUDA-accelerated image processing pipeline.",
        "Crowd-Project" => "Crowd density estimation with computer vision.",
        "email-agent" => "AI email automation agent.",
        "VisionM" => "Multi-modal vision model pipeline.",
        "BigDataAnalytics" => "Big data analytics with PySpark.",
        "Sentiment_Analyzer_BigData" => "Large-scale sentiment analysis with distributed NLP.",
        "Dino_Chrome" => "AI agent that plays the Chrome Dino game using RL.",
        "PCAP_Lab" => "Parallel computing lab with CUDA and OpenMP.",
        "N-Puzzle" => "N-Puzzle solver with search algorithms.",
        "Animation" => "JavaScript animation experiments and demos.",
        "Cards" => "Interactive card UI components.",
        "Local" => "Local-first application development.",
        "MovieBuilder" => "Movie discovery and recommendation app.",
        _ => "A software engineering project.",
    }
}

/// Longer copy used on featured cards
pub fn featured_description(repo: &Repo) -> &str {
    if let Some(d) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
        return d;
    }
    match repo.name.as_str() {
        "VisionM" => {
            "Vision model pipeline for multi-modal AI applications and visual understanding."
        }
        "PacMan-RL" => {
            "Reinforcement learning agent trained to play Pac-Man using policy gradients and Q-learning algorithms."
        }
        "email-agent" => {
            "Intelligent email automation agent with AI-driven response generation and classification."
        }
        "J.A.R.V.I.S" => {
            "AI-powered personal assistant system with natural language understanding and task automation capabilities."
        }
        "Sentiment_Analyzer_BigData" => {
            "Large-scale sentiment analysis pipeline using distributed computing and NLP on big data."
        }
        "Dino_Chrome" => {
            "AI agent that learns to play the Chrome Dino game using reinforcement learning and computer vision."
        }
        _ => "An AI/ML engineering project exploring intelligent system design.",
    }
}

/// Tags shown on featured cards
pub fn featured_tags(name: &str) -> &'static [&'static str] {
    match name {
        "VisionM" => &["Computer Vision", "TypeScript", "Multi-Modal"],
        "PacMan-RL" => &["Reinforcement Learning", "Q-Learning", "OpenAI Gym"],
        "email-agent" | "J.A.R.V.I.S" => &["AI Agent", "NLP", "Automation"],
        "Sentiment_Analyzer_BigData" => &["NLP", "Big Data", "Sentiment Analysis"],
        "Dino_Chrome" => &["Reinforcement Learning", "Computer Vision", "Automation"],
        _ => &["AI/ML"],
    }
}

/// GitHub linguist colour for a language, `#888888` when unknown
pub fn language_color(language: &str) -> (u8, u8, u8) {
    match language {
        "Python" => (0x35, 0x72, 0xA5),
        "Jupyter Notebook" => (0xDA, 0x5B, 0x0B),
        "TypeScript" => (0x31, 0x78, 0xC6),
        "JavaScript" => (0xF7, 0xDF, 0x1E),
        "C++" => (0xF3, 0x4B, 0x7D),
        "Cuda" => (0x3A, 0x4E, 0x3A),
        "HTML" => (0xE3, 0x4C, 0x26),
        "Rust" => (0xDE, 0xA5, 0x84),
        "Go" => (0x00, 0xAD, 0xD8),
        "Java" => (0xB0, 0x72, 0x19),
        _ => (0x88, 0x88, 0x88),
    }
}
