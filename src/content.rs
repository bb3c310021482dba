//! Static site copy: projects, expertise, and the FLONK landing page.

/// One row in the work section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub year: &'static str,
    pub tech: &'static [&'static str],
    pub impact: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCategory {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub projects: &'static [Project],
}

pub const CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory {
        title: "STUDIO",
        subtitle: "Client Collaborations",
        projects: &[
            Project {
                id: "alpha",
                name: "QuantumPay",
                tagline: "Real-time payment infrastructure for emerging markets",
                description: "Led the development of a distributed payment processing system \
                    handling 50M+ transactions monthly across 12 countries. Built microservices \
                    architecture with event-sourcing for financial compliance and audit trails. \
                    Reduced transaction latency by 73% while maintaining 99.99% uptime.",
                role: "Lead Engineer",
                year: "2023-2024",
                tech: &[
                    "React",
                    "Node.js",
                    "PostgreSQL",
                    "Redis",
                    "Kafka",
                    "AWS",
                    "Docker",
                    "Kubernetes",
                ],
                impact: Some("50M+ transactions/month"),
            },
            Project {
                id: "neon",
                name: "StreamEdge",
                tagline: "Low-latency video delivery platform",
                description: "Architected a CDN-optimized streaming platform supporting 2M \
                    concurrent viewers with adaptive bitrate streaming. Implemented WebRTC for \
                    real-time chat and HLS for scalable video delivery. Custom player with an \
                    integrated analytics pipeline processing 500GB daily.",
                role: "Senior Full-Stack Engineer",
                year: "2022-2023",
                tech: &[
                    "React",
                    "TypeScript",
                    "Go",
                    "WebRTC",
                    "FFmpeg",
                    "GCP",
                    "Redis",
                    "MongoDB",
                ],
                impact: Some("2M concurrent users"),
            },
            Project {
                id: "grid",
                name: "DataLoom",
                tagline: "Enterprise data visualization suite",
                description: "Designed and built a real-time analytics dashboard for Fortune 500 \
                    clients. Custom WebGL rendering engine for handling 1M+ data points at 60fps. \
                    Integrated with 20+ data sources including Salesforce, Snowflake, and custom \
                    APIs. Modular plugin system for extensibility.",
                role: "Technical Lead",
                year: "2021-2022",
                tech: &[
                    "React",
                    "D3.js",
                    "WebGL",
                    "Python",
                    "FastAPI",
                    "PostgreSQL",
                    "Docker",
                ],
                impact: Some("Used by 500+ analysts"),
            },
        ],
    },
    ProjectCategory {
        title: "LAB",
        subtitle: "Personal Experiments",
        projects: &[
            Project {
                id: "neural",
                name: "Neural Canvas",
                tagline: "AI-powered generative art platform",
                description: "Built an experimental platform exploring the intersection of \
                    machine learning and creative coding. Custom GAN models for style transfer \
                    and Stable Diffusion for text-to-image generation. Real-time collaboration \
                    over WebSocket with operational transforms.",
                role: "Solo Developer",
                year: "2024",
                tech: &[
                    "Next.js",
                    "Python",
                    "PyTorch",
                    "WebSocket",
                    "Supabase",
                    "Vercel",
                ],
                impact: None,
            },
            Project {
                id: "syntax",
                name: "SyntaxForge",
                tagline: "Developer productivity toolkit",
                description: "Open-source collection of CLI tools and editor extensions for \
                    modern web development. Smart code snippets, automated refactoring patterns, \
                    and custom lint rules. Adopted by 5K+ developers with 200+ GitHub stars.",
                role: "Creator & Maintainer",
                year: "2023-Present",
                tech: &["TypeScript", "Node.js", "VS Code API", "Rust", "WebAssembly"],
                impact: Some("5K+ downloads"),
            },
            Project {
                id: "soundwave",
                name: "SoundWave",
                tagline: "Spatial audio visualization engine",
                description: "WebGL-based audio visualizer with real-time frequency analysis and \
                    3D particle systems. Multiple visualization modes and MIDI controller \
                    integration.",
                role: "Solo Developer",
                year: "2023",
                tech: &["Three.js", "GLSL", "Web Audio API", "React", "TypeScript"],
                impact: None,
            },
        ],
    },
];

/// Looks a project up by id across all categories.
pub fn project(id: &str) -> Option<&'static Project> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.projects)
        .find(|project| project.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expertise {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        category: "FRONTEND",
        items: &["React", "TypeScript", "Next.js", "Tailwind", "Framer Motion", "Three.js"],
    },
    Expertise {
        category: "BACKEND",
        items: &["Node.js", "Python", "Go", "PostgreSQL", "Redis", "GraphQL"],
    },
    Expertise {
        category: "INFRASTRUCTURE",
        items: &["AWS", "Docker", "Kubernetes", "Terraform", "CI/CD", "Monitoring"],
    },
];

/// `(title, description)`
pub const CORE_VALUES: &[(&str, &str)] = &[
    (
        "Performance First",
        "Every millisecond matters. Obsessed with optimization and efficiency.",
    ),
    (
        "User-Centric",
        "Technology serves people, not the other way around.",
    ),
    (
        "Continuous Learning",
        "The field evolves daily. Staying curious is non-negotiable.",
    ),
];

pub const HERO_KICKER: &str = "SENIOR SOFTWARE ENGINEER";
pub const HERO_TITLE: &str = "BUILDING\nSYSTEMS\nTHAT SCALE";
pub const HERO_PITCH: &str = "I architect resilient distributed systems and craft interfaces \
    people love. 8 years deep in the intersection of engineering precision and design thinking.";

pub mod links {
    pub const GITHUB: &str = "https://github.com/Franjoo";
    pub const LINKEDIN: &str = "https://www.linkedin.com/in/franz-benthin/";
    pub const MAIL: &str = "mailto:hi@franz.cx";
    pub const APP_STORE: &str = "https://apps.apple.com";
}

pub const MAINTENANCE_HEADLINE: &str = "CRAFTING SOMETHING SPECIAL";
pub const MAINTENANCE_PITCH: &str = "Building a digital experience that deserves your attention.";
pub const MAINTENANCE_ASIDE: &str = "Worth the wait.";
pub const MAINTENANCE_LAUNCH: &str = "ESTIMATED LAUNCH · Q1 2026";

pub mod flonk {
    pub const TITLE: &str = "FLONK";
    pub const TAGLINE: &str = "FLONK is a colourful fast-paced arcade game with one-tap controls \
        and random generated levels. Easy to learn but hard to master. It's all about reaching \
        the throne.";
    pub const WARNING: &str = "⚠ DO NOT OVERESTIMATE YOURSELF";

    pub const FEATURES: &[&str] = &[
        "Jump into a set of unique game mechanics!",
        "Beautiful, randomly generated and increasingly complex levels are waiting to be reached!",
        "You will soon learn that a sharp eye, a little patience and good reflexes are more than \
         needed!",
        "Gather a bunch of coins and other useful things on your journey upwards to the throne!",
        "You will die.. often die.. And start again! Be warned, this game is addictive!",
    ];

    pub const MORE_FEATURES: &[&str] = &[
        "Invest your hard-earned coins in 'Glitches', which permanently equip you with special \
         abilities!",
        "With new skins you can create a unique look for your awesome character!",
        "FLONK is made for everyone and therefore available in 9 languages.",
        "Let the unique soundtrack mesmerize you. Be sure, it won't let you go that easily!",
        "Haven't you had enough? Try the challenges! They will demand everything from you!",
    ];

    pub const ABOUT_TITLE: &str = "REACH THE THRONE";
    pub const ABOUT: &str = "FLONK is a minimalist arcade game that combines simple one-tap \
        controls with increasingly challenging randomly generated levels. Navigate through \
        geometric obstacles, collect power-ups, and prove your skills as you climb the \
        leaderboard.";

    pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "EULA"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES
            .iter()
            .flat_map(|category| category.projects)
            .map(|project| project.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn lookup_finds_projects_in_any_category() {
        assert_eq!(project("alpha").map(|p| p.name), Some("QuantumPay"));
        assert_eq!(project("soundwave").map(|p| p.name), Some("SoundWave"));
        assert_eq!(project("missing"), None);
    }
}
