//! Profile Content
//!
//! Everything the portfolio says about its owner, as plain data. The default
//! value is the published portfolio; a TOML file with the same shape can
//! replace any part of it (missing keys keep their defaults).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Document metadata (window title, about box)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub author: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Amulya Parashar | AI/ML Engineer".into(),
            description: "AI/ML Engineer building intelligent systems. Specializing in Deep \
                          Learning, LLMs, Computer Vision, and Reinforcement Learning. BTech \
                          CSE AI & ML at MIT Manipal."
                .into(),
            keywords: strings(&[
                "AI Engineer",
                "ML Engineer",
                "Deep Learning",
                "Machine Learning",
                "LLM",
                "Computer Vision",
                "Reinforcement Learning",
                "Amulya Parashar",
                "MIT Manipal",
                "Portfolio",
            ]),
            url: "https://amulyaparashar.vercel.app".into(),
            author: "Amulya Parashar".into(),
        }
    }
}

/// Label, title and blurb at the top of a section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heading {
    pub label: String,
    pub title: String,
    pub description: String,
}

impl Heading {
    fn new(label: &str, title: &str, description: &str) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headings {
    pub about: Heading,
    pub featured: Heading,
    pub projects: Heading,
    pub stats: Heading,
    pub skills: Heading,
    pub resume: Heading,
    pub contact: Heading,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            about: Heading::new(
                "About",
                "Engineering Intelligence",
                "I approach AI/ML not as a set of tools, but as a discipline of systems \
                 thinking \u{2014} designing architectures that learn, adapt, and scale.",
            ),
            featured: Heading::new(
                "AI/ML Focus",
                "Intelligent Systems I've Built",
                "Projects that demonstrate depth in machine learning, deep learning, \
                 computer vision, and reinforcement learning.",
            ),
            projects: Heading::new(
                "Projects",
                "What I've Built",
                "A collection of projects spanning AI/ML, web development, and systems \
                 programming.",
            ),
            stats: Heading::new(
                "LeetCode",
                "Problem Solving",
                "Strong foundation in Data Structures & Algorithms.",
            ),
            skills: Heading::new(
                "Skills",
                "Technical Arsenal",
                "Tools and technologies I use to build intelligent systems.",
            ),
            resume: Heading::new(
                "Resume",
                "Background & Experience",
                "A snapshot of my academic journey and technical experience.",
            ),
            contact: Heading::new(
                "Contact",
                "Let's Connect",
                "Have a project in mind, or just want to chat about AI/ML? I'd love to \
                 hear from you.",
            ),
        }
    }
}

/// `$ command` followed by its output, in the hero's terminal box
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub command: String,
    pub output: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub event: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub details: String,
}

/// The portfolio owner and everything shown about them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub meta: SiteMeta,
    /// Typed out in the hero
    pub name: String,
    /// Small caps line above the name
    pub role: String,
    pub tagline: String,
    pub summary: String,
    pub terminal: Vec<TerminalLine>,
    pub bio: Vec<String>,
    pub expertise: Vec<Expertise>,
    pub timeline: Vec<Milestone>,
    pub skills: Vec<SkillCategory>,
    pub highlights: Vec<Highlight>,
    pub resume_url: String,
    pub github_user: String,
    pub leetcode_user: String,
    pub email: String,
    pub footer: String,
    pub headings: Headings,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            meta: SiteMeta::default(),
            name: "Amulya Parashar".into(),
            role: "AI/ML Engineer".into(),
            tagline: "Building Intelligent Systems".into(),
            summary: "Specializing in Deep Learning, LLMs, Computer Vision & Reinforcement \
                      Learning. Turning complex problems into elegant, data-driven solutions."
                .into(),
            terminal: vec![
                terminal("whoami", "Amulya Parashar"),
                terminal(
                    "cat focus.txt",
                    "Deep Learning \u{b7} LLMs \u{b7} Computer Vision \u{b7} RL",
                ),
                terminal("echo $UNIVERSITY", "MIT Manipal \u{2014} B.Tech CSE (AI & ML)"),
            ],
            bio: strings(&[
                "I'm Amulya Parashar, a B.Tech Computer Science student specializing in AI & \
                 ML at MIT Manipal. I build systems at the intersection of deep learning, \
                 computer vision, and reinforcement learning \u{2014} from training neural \
                 networks on GPUs with CUDA to deploying intelligent agents that solve \
                 real-world problems.",
                "My work spans PyTorch-based deep learning pipelines, CUDA-accelerated image \
                 processing, reinforcement learning environments, AI-powered assistants, and \
                 full-stack ML applications. I believe in writing clean, efficient code and \
                 building systems that are not just accurate, but also fast and scalable.",
            ]),
            expertise: vec![
                expertise(
                    "Machine Learning",
                    "Classical ML, ensemble methods, feature engineering",
                ),
                expertise(
                    "Deep Learning",
                    "CNNs, RNNs, Transformers, training pipelines",
                ),
                expertise(
                    "Computer Vision",
                    "Object detection, image segmentation, CUDA acceleration",
                ),
                expertise(
                    "Reinforcement Learning",
                    "Policy gradients, Q-learning, multi-agent systems",
                ),
                expertise("LLMs & NLP", "Language models, agents, prompt engineering"),
                expertise(
                    "Big Data & Analytics",
                    "Distributed computing, PySpark, data pipelines",
                ),
            ],
            timeline: vec![
                milestone("2022", "Started B.Tech CSE (AI & ML) at MIT Manipal"),
                milestone("2023", "Deep Learning & Computer Vision research projects"),
                milestone(
                    "2024",
                    "Built AI agents, CUDA-accelerated systems, RL environments",
                ),
                milestone("2025", "Advanced LLM applications & full-stack AI systems"),
            ],
            skills: vec![
                skills(
                    "AI / ML",
                    &[
                        "PyTorch",
                        "TensorFlow",
                        "Scikit-learn",
                        "Keras",
                        "Pandas",
                        "NumPy",
                        "OpenCV",
                        "Hugging Face",
                        "ONNX",
                        "Weights & Biases",
                        "MLflow",
                        "CUDA",
                    ],
                ),
                skills(
                    "Programming",
                    &["Python", "C++", "TypeScript", "JavaScript", "SQL", "Bash", "Java"],
                ),
                skills(
                    "Web & Frameworks",
                    &[
                        "Next.js",
                        "React",
                        "Node.js",
                        "FastAPI",
                        "Flask",
                        "REST APIs",
                        "TailwindCSS",
                    ],
                ),
                skills(
                    "Tools & Infrastructure",
                    &[
                        "Git",
                        "Docker",
                        "Linux",
                        "VS Code",
                        "Jupyter",
                        "Google Colab",
                        "Vercel",
                        "GitHub Actions",
                        "PySpark",
                        "MongoDB",
                        "PostgreSQL",
                    ],
                ),
            ],
            highlights: vec![
                highlight(
                    "Education",
                    "B.Tech CSE (AI & ML) \u{2014} MIT Manipal, 2022\u{2013}2026",
                ),
                highlight(
                    "Focus Areas",
                    "Deep Learning, Computer Vision, Reinforcement Learning, LLMs, CUDA \
                     Programming",
                ),
                highlight(
                    "Experience",
                    "AI/ML projects, full-stack development, open-source contributions",
                ),
            ],
            resume_url: "https://amulyaparashar.vercel.app/resume.pdf".into(),
            github_user: "KING-258".into(),
            leetcode_user: "KING-258".into(),
            email: "amulyaparashar258@gmail.com".into(),
            footer: "Amulya Parashar. Engineered with precision.".into(),
            headings: Headings::default(),
        }
    }
}

impl Profile {
    /// Load a profile from a TOML file; unspecified keys keep their defaults
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let profile: Profile = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), name = %profile.name, "Loaded profile");
        Ok(profile)
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    pub fn leetcode_url(&self) -> String {
        format!("https://leetcode.com/u/{}", self.leetcode_user)
    }

    /// `© {year} {footer}`
    pub fn copyright(&self, year: i32) -> String {
        format!("\u{a9} {year} {}", self.footer)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn terminal(command: &str, output: &str) -> TerminalLine {
    TerminalLine {
        command: command.into(),
        output: output.into(),
    }
}

fn expertise(label: &str, description: &str) -> Expertise {
    Expertise {
        label: label.into(),
        description: description.into(),
    }
}

fn milestone(year: &str, event: &str) -> Milestone {
    Milestone {
        year: year.into(),
        event: event.into(),
    }
}

fn skills(title: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        title: title.into(),
        skills: strings(items),
    }
}

fn highlight(title: &str, details: &str) -> Highlight {
    Highlight {
        title: title.into(),
        details: details.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_content() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Amulya Parashar");
        assert_eq!(profile.expertise.len(), 6);
        assert_eq!(profile.timeline.len(), 4);
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.github_url(), "https://github.com/KING-258");
        assert_eq!(profile.leetcode_url(), "https://leetcode.com/u/KING-258");
        assert_eq!(
            profile.copyright(2025),
            "\u{a9} 2025 Amulya Parashar. Engineered with precision."
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "Grace Hopper"
github_user = "grace"

[meta]
title = "Grace | Compilers"

[[skills]]
title = "Languages"
skills = ["COBOL", "FLOW-MATIC"]
"#
        )
        .unwrap();

        let profile = Profile::from_toml_path(file.path()).unwrap();
        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.meta.title, "Grace | Compilers");
        assert_eq!(profile.meta.author, "Amulya Parashar");
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].skills, vec!["COBOL", "FLOW-MATIC"]);
        assert_eq!(profile.timeline.len(), 4);
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::from_toml_path(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = [unclosed").unwrap();
        let err = Profile::from_toml_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
