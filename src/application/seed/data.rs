//! Seed fixtures.
//!
//! Fixtures reference media by filename and skills by name; the loader
//! resolves both to generated ids at insert time. Skill name resolution is
//! case-insensitive, and unknown names are dropped with a warning rather than
//! aborting the load.

use serde_json::Value;
use time::Date;
use time::macros::date;

use crate::domain::entities::{NavLinkRecord, SocialLinkRecord};
use crate::domain::rich_text::{self, Section};
use crate::domain::types::{ContentStatus, EmploymentType, SkillCategory, SocialPlatform};

pub struct MediaFixture {
    pub filename: &'static str,
    pub alt: &'static str,
    pub content_type: &'static str,
    pub width: i32,
    pub height: i32,
}

impl MediaFixture {
    pub fn url(&self) -> String {
        format!("/media/{}", self.filename)
    }
}

pub struct SkillFixture {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub category: SkillCategory,
    pub url: Option<&'static str>,
    pub sort_order: i32,
    pub show_on_stack: bool,
}

pub struct ProjectFixture {
    pub title: &'static str,
    /// Explicit slug; derived from the title when absent.
    pub slug: Option<&'static str>,
    pub description: Option<&'static str>,
    pub image: Option<&'static str>,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub featured: bool,
    pub sort_order: i32,
    pub content: Option<Value>,
    pub status: ContentStatus,
}

pub struct PositionFixture {
    pub title: &'static str,
    pub employment_type: EmploymentType,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub struct ExperienceFixture {
    pub company: &'static str,
    pub logo: Option<&'static str>,
    pub website: Option<&'static str>,
    pub location: Option<&'static str>,
    pub is_current: bool,
    pub sort_order: i32,
    pub positions: Vec<PositionFixture>,
}

pub struct GalleryFixture {
    pub image: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub exif: Option<Value>,
    pub sort_order: i32,
}

pub struct BlogFixture {
    pub title: &'static str,
    pub slug: &'static str,
    pub summary: &'static str,
    pub image: Option<&'static str>,
    pub published_at: Option<Date>,
    pub content: Value,
    pub meta_title: &'static str,
    pub meta_description: &'static str,
    pub status: ContentStatus,
}

pub struct ProfileFixture {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: Value,
    pub avatar: Option<&'static str>,
    pub email: &'static str,
    pub location: Option<&'static str>,
    pub timezone: Option<&'static str>,
    pub github: Option<&'static str>,
    pub languages: Vec<String>,
    pub social_links: Vec<SocialLinkRecord>,
}

pub fn media() -> Vec<MediaFixture> {
    vec![
        MediaFixture {
            filename: "avatar.png",
            alt: "Portrait of Jay",
            content_type: "image/png",
            width: 512,
            height: 512,
        },
        MediaFixture {
            filename: "hero.png",
            alt: "Workspace at golden hour",
            content_type: "image/png",
            width: 1920,
            height: 1080,
        },
        MediaFixture {
            filename: "project-challengerate.png",
            alt: "ChallengeRate dashboard screenshot",
            content_type: "image/png",
            width: 1600,
            height: 900,
        },
        MediaFixture {
            filename: "project-drvandna.png",
            alt: "Dr. Vandna clinic website screenshot",
            content_type: "image/png",
            width: 1600,
            height: 900,
        },
        MediaFixture {
            filename: "project-ecell.png",
            alt: "E-Cell landing page screenshot",
            content_type: "image/png",
            width: 1600,
            height: 900,
        },
        MediaFixture {
            filename: "project-educave.png",
            alt: "Educave mobile app screenshot",
            content_type: "image/png",
            width: 1080,
            height: 1920,
        },
    ]
}

pub fn skills() -> Vec<SkillFixture> {
    vec![
        // Frontend
        SkillFixture {
            name: "React",
            description: Some("Component-driven UI development"),
            category: SkillCategory::Frontend,
            url: Some("https://react.dev"),
            sort_order: 100,
            show_on_stack: true,
        },
        SkillFixture {
            name: "Next.js",
            description: Some("Full-stack React framework"),
            category: SkillCategory::Frontend,
            url: Some("https://nextjs.org"),
            sort_order: 95,
            show_on_stack: true,
        },
        SkillFixture {
            name: "TypeScript",
            description: Some("Typed JavaScript at scale"),
            category: SkillCategory::Frontend,
            url: Some("https://www.typescriptlang.org"),
            sort_order: 90,
            show_on_stack: true,
        },
        SkillFixture {
            name: "JavaScript",
            description: None,
            category: SkillCategory::Frontend,
            url: None,
            sort_order: 85,
            show_on_stack: false,
        },
        SkillFixture {
            name: "Tailwind CSS",
            description: Some("Utility-first styling"),
            category: SkillCategory::Frontend,
            url: Some("https://tailwindcss.com"),
            sort_order: 80,
            show_on_stack: true,
        },
        SkillFixture {
            name: "React Native",
            description: Some("Cross-platform mobile apps"),
            category: SkillCategory::Frontend,
            url: Some("https://reactnative.dev"),
            sort_order: 75,
            show_on_stack: true,
        },
        // Backend
        SkillFixture {
            name: "Node.js",
            description: Some("Server-side JavaScript runtime"),
            category: SkillCategory::Backend,
            url: Some("https://nodejs.org"),
            sort_order: 100,
            show_on_stack: true,
        },
        SkillFixture {
            name: "Payload CMS",
            description: Some("Headless content management"),
            category: SkillCategory::Backend,
            url: Some("https://payloadcms.com"),
            sort_order: 95,
            show_on_stack: true,
        },
        SkillFixture {
            name: "PostgreSQL",
            description: Some("Relational database of choice"),
            category: SkillCategory::Backend,
            url: Some("https://www.postgresql.org"),
            sort_order: 90,
            show_on_stack: true,
        },
        SkillFixture {
            name: "MongoDB",
            description: None,
            category: SkillCategory::Backend,
            url: None,
            sort_order: 85,
            show_on_stack: false,
        },
        SkillFixture {
            name: "Express",
            description: None,
            category: SkillCategory::Backend,
            url: None,
            sort_order: 80,
            show_on_stack: false,
        },
        SkillFixture {
            name: "GraphQL",
            description: None,
            category: SkillCategory::Backend,
            url: None,
            sort_order: 75,
            show_on_stack: false,
        },
        // Tools
        SkillFixture {
            name: "Git",
            description: None,
            category: SkillCategory::Tools,
            url: None,
            sort_order: 100,
            show_on_stack: true,
        },
        SkillFixture {
            name: "Docker",
            description: Some("Containerized dev and deploy"),
            category: SkillCategory::Tools,
            url: Some("https://www.docker.com"),
            sort_order: 95,
            show_on_stack: true,
        },
        SkillFixture {
            name: "Figma",
            description: None,
            category: SkillCategory::Tools,
            url: None,
            sort_order: 90,
            show_on_stack: false,
        },
        SkillFixture {
            name: "Vercel",
            description: None,
            category: SkillCategory::Tools,
            url: None,
            sort_order: 85,
            show_on_stack: false,
        },
        // Other
        SkillFixture {
            name: "Technical Writing",
            description: None,
            category: SkillCategory::Other,
            url: None,
            sort_order: 100,
            show_on_stack: false,
        },
        SkillFixture {
            name: "Mentoring",
            description: None,
            category: SkillCategory::Other,
            url: None,
            sort_order: 90,
            show_on_stack: false,
        },
    ]
}

pub fn projects() -> Vec<ProjectFixture> {
    vec![
        ProjectFixture {
            title: "ChallengeRate",
            slug: Some("challengerate"),
            description: Some("A platform for rating and tracking coding challenges."),
            image: Some("project-challengerate.png"),
            technologies: &["Next.js", "TypeScript", "PostgreSQL", "Tailwind CSS"],
            live_url: Some("https://challengerate.com"),
            source_url: Some("https://github.com/srjaykikani/challengerate"),
            featured: true,
            sort_order: 100,
            content: Some(rich_text::sections(&[
                Section {
                    heading: None,
                    paragraphs: &[
                        "ChallengeRate lets developers rate coding challenges and track \
                         their progress across platforms.",
                    ],
                },
                Section {
                    heading: Some("The Challenge"),
                    paragraphs: &[
                        "Aggregating challenge data from multiple sources into a single \
                         ranked feed without stale results.",
                    ],
                },
                Section {
                    heading: Some("The Solution"),
                    paragraphs: &[
                        "A normalized PostgreSQL schema with incremental sync jobs and a \
                         cached ranking endpoint.",
                    ],
                },
            ])),
            status: ContentStatus::Published,
        },
        ProjectFixture {
            title: "Dr. Vandna Clinic",
            slug: Some("drvandna"),
            description: Some("Appointment booking and patient information site for a clinic."),
            image: Some("project-drvandna.png"),
            technologies: &["React", "Node.js", "MongoDB"],
            live_url: Some("https://drvandna.com"),
            source_url: None,
            featured: true,
            sort_order: 90,
            content: Some(rich_text::paragraphs(&[
                "A clinic website with online appointment booking, service listings, \
                 and patient FAQs.",
            ])),
            status: ContentStatus::Published,
        },
        ProjectFixture {
            title: "E-Cell Website",
            slug: Some("ecell"),
            description: Some("Landing site for the campus entrepreneurship cell."),
            image: Some("project-ecell.png"),
            technologies: &["Next.js", "Tailwind CSS"],
            live_url: None,
            source_url: Some("https://github.com/srjaykikani/ecell"),
            featured: false,
            sort_order: 80,
            content: None,
            status: ContentStatus::Published,
        },
        ProjectFixture {
            title: "Educave",
            // No slug on purpose: the loader derives one from the title.
            slug: None,
            description: Some("A mobile-first learning app for school students."),
            image: Some("project-educave.png"),
            // Firebase is not in the skill catalog; the loader drops it.
            technologies: &["React Native", "Firebase"],
            live_url: None,
            source_url: None,
            featured: false,
            sort_order: 70,
            content: Some(rich_text::paragraphs(&[
                "Educave delivers bite-sized lessons and quizzes to school students \
                 on low-end devices.",
            ])),
            status: ContentStatus::Published,
        },
        ProjectFixture {
            title: "Portfolio Backend",
            slug: Some("portfolio-backend"),
            description: Some("The content backend serving this very site."),
            image: None,
            technologies: &["Payload CMS", "Next.js", "PostgreSQL"],
            live_url: None,
            source_url: Some("https://github.com/srjaykikani/vitrine"),
            featured: false,
            sort_order: 60,
            content: None,
            status: ContentStatus::Published,
        },
        ProjectFixture {
            title: "Secret Project",
            slug: Some("secret-project"),
            description: Some("Something new. Not ready to talk about it yet."),
            image: None,
            technologies: &[],
            live_url: None,
            source_url: None,
            featured: false,
            sort_order: 10,
            content: None,
            status: ContentStatus::Draft,
        },
    ]
}

pub fn experiences() -> Vec<ExperienceFixture> {
    vec![
        ExperienceFixture {
            company: "Freelance",
            logo: None,
            website: None,
            location: Some("Remote"),
            is_current: true,
            sort_order: 100,
            positions: vec![PositionFixture {
                title: "Full Stack Developer",
                employment_type: EmploymentType::Freelance,
                start_date: date!(2023 - 06 - 01),
                end_date: None,
                description: &[
                    "Building web applications end to end for small businesses, from \
                     design handoff to deployment.",
                ],
                skills: &["React", "Node.js", "PostgreSQL"],
            }],
        },
        ExperienceFixture {
            company: "Finlytics",
            logo: None,
            website: Some("https://finlytics.example.com"),
            location: Some("Ahmedabad, India"),
            is_current: false,
            sort_order: 90,
            positions: vec![
                PositionFixture {
                    title: "Software Developer",
                    employment_type: EmploymentType::FullTime,
                    start_date: date!(2022 - 01 - 15),
                    end_date: Some(date!(2023 - 05 - 31)),
                    description: &[
                        "Owned the customer-facing dashboard and led the migration \
                         from JavaScript to TypeScript.",
                    ],
                    skills: &["React", "TypeScript"],
                },
                PositionFixture {
                    title: "Developer Intern",
                    employment_type: EmploymentType::Internship,
                    start_date: date!(2021 - 06 - 01),
                    end_date: Some(date!(2021 - 12 - 31)),
                    description: &["Shipped internal tooling and fixed frontend bugs."],
                    skills: &["JavaScript"],
                },
            ],
        },
        ExperienceFixture {
            company: "Campus E-Cell",
            logo: None,
            website: None,
            location: Some("Surat, India"),
            is_current: false,
            sort_order: 80,
            positions: vec![PositionFixture {
                title: "Web Lead",
                employment_type: EmploymentType::PartTime,
                start_date: date!(2020 - 08 - 01),
                end_date: Some(date!(2021 - 05 - 31)),
                description: &[
                    "Ran the web team for the entrepreneurship cell and built the \
                     event registration site.",
                ],
                skills: &["Next.js", "Tailwind CSS"],
            }],
        },
    ]
}

pub fn gallery() -> Vec<GalleryFixture> {
    vec![
        GalleryFixture {
            image: "hero.png",
            title: Some("Golden hour"),
            description: Some("The desk where most of this was built."),
            exif: Some(serde_json::json!({
                "camera": "Fujifilm X-T30",
                "lens": "XF 23mm f/2",
                "iso": 400,
                "aperture": "f/2.8",
                "shutter": "1/125",
            })),
            sort_order: 100,
        },
        GalleryFixture {
            image: "project-challengerate.png",
            title: Some("ChallengeRate launch"),
            description: None,
            exif: None,
            sort_order: 90,
        },
        GalleryFixture {
            image: "project-educave.png",
            title: Some("Educave in the field"),
            description: Some("First classroom pilot."),
            exif: None,
            sort_order: 80,
        },
    ]
}

pub fn blogs() -> Vec<BlogFixture> {
    vec![
        BlogFixture {
            title: "Building My Portfolio with Payload and Next.js",
            slug: "building-portfolio-payload-nextjs",
            summary: "How this site came together, and what I would do differently.",
            image: Some("hero.png"),
            published_at: Some(date!(2024 - 12 - 01)),
            content: rich_text::sections(&[
                Section {
                    heading: None,
                    paragraphs: &[
                        "I rebuilt my portfolio this year around a headless CMS so the \
                         content lives apart from the rendering.",
                    ],
                },
                Section {
                    heading: Some("Why a CMS at all"),
                    paragraphs: &[
                        "Hardcoded content meant every typo fix was a deploy. Moving \
                         content behind an API made edits instant and kept the \
                         frontend dumb.",
                    ],
                },
                Section {
                    heading: Some("What I'd change"),
                    paragraphs: &[
                        "Cache invalidation was an afterthought. Next time it gets \
                         designed in from the start.",
                    ],
                },
            ]),
            meta_title: "Building My Portfolio with Payload and Next.js",
            meta_description: "A walkthrough of rebuilding a portfolio site on a headless CMS.",
            status: ContentStatus::Published,
        },
        BlogFixture {
            title: "From React to React Native: A Journey",
            slug: "react-to-react-native-journey",
            summary: "What carried over, what didn't, and what surprised me.",
            image: None,
            published_at: Some(date!(2024 - 11 - 15)),
            content: rich_text::sections(&[
                Section {
                    heading: None,
                    paragraphs: &[
                        "Moving from the web to mobile with React Native felt familiar \
                         for about a day.",
                    ],
                },
                Section {
                    heading: Some("The surprises"),
                    paragraphs: &[
                        "Navigation, gestures, and the build toolchain are a different \
                         world from the browser.",
                    ],
                },
            ]),
            meta_title: "From React to React Native",
            meta_description: "Lessons from taking web React skills to mobile.",
            status: ContentStatus::Published,
        },
        BlogFixture {
            title: "TypeScript Best Practices I Actually Use",
            slug: "typescript-best-practices",
            summary: "A short list, earned the hard way.",
            image: None,
            published_at: Some(date!(2024 - 10 - 20)),
            content: rich_text::sections(&[
                Section {
                    heading: None,
                    paragraphs: &[
                        "Most TypeScript advice lists twenty rules. These are the five \
                         I reach for every day.",
                    ],
                },
                Section {
                    heading: Some("Narrow early"),
                    paragraphs: &[
                        "Push unions through discriminants at the boundary and the rest \
                         of the code stays simple.",
                    ],
                },
            ]),
            meta_title: "TypeScript Best Practices I Actually Use",
            meta_description: "Five TypeScript habits that pay for themselves.",
            status: ContentStatus::Published,
        },
        BlogFixture {
            title: "Writing Good Commit Messages",
            slug: "writing-good-commit-messages",
            summary: "Your future self is the audience.",
            image: None,
            published_at: Some(date!(2024 - 09 - 10)),
            content: rich_text::paragraphs(&[
                "A commit message is a letter to whoever reads the blame output next \
                 year. Usually that's you.",
                "Say what changed and why. The diff already says how.",
            ]),
            meta_title: "Writing Good Commit Messages",
            meta_description: "Why commit messages matter and how to write them.",
            status: ContentStatus::Published,
        },
        BlogFixture {
            title: "AI-Assisted Development: Early Notes",
            slug: "ai-assisted-development",
            summary: "Draft thoughts on coding with an assistant.",
            image: None,
            published_at: Some(date!(2024 - 12 - 10)),
            content: rich_text::paragraphs(&[
                "Still collecting notes on where assistants help and where they \
                 get in the way.",
            ]),
            meta_title: "AI-Assisted Development: Early Notes",
            meta_description: "Work-in-progress notes on assisted coding.",
            status: ContentStatus::Draft,
        },
    ]
}

pub fn profile() -> ProfileFixture {
    ProfileFixture {
        name: "Hey, I'm Jay!",
        title: "Software Developer",
        bio: rich_text::formatted_paragraph(&[
            ("I build web and mobile apps, currently deep in ", false),
            ("Payload", true),
            (" and the React ecosystem. Based in India, working with teams everywhere.", false),
        ]),
        avatar: Some("avatar.png"),
        email: "hello@jaykikani.dev",
        location: Some("Surat, India"),
        timezone: Some("Asia/Kolkata"),
        github: Some("srjaykikani"),
        languages: vec![
            "English".to_string(),
            "Hindi".to_string(),
            "Gujarati".to_string(),
        ],
        social_links: vec![
            SocialLinkRecord {
                platform: SocialPlatform::Github,
                url: "https://github.com/srjaykikani".to_string(),
                label: None,
            },
            SocialLinkRecord {
                platform: SocialPlatform::Twitter,
                url: "https://twitter.com/srjaykikani".to_string(),
                label: None,
            },
            SocialLinkRecord {
                platform: SocialPlatform::Instagram,
                url: "https://instagram.com/srjaykikani".to_string(),
                label: None,
            },
            SocialLinkRecord {
                platform: SocialPlatform::Linkedin,
                url: "https://linkedin.com/in/srjaykikani".to_string(),
                label: Some("LinkedIn".to_string()),
            },
        ],
    }
}

pub fn header_links() -> Vec<NavLinkRecord> {
    vec![
        NavLinkRecord {
            label: "Portfolio".to_string(),
            url: "/".to_string(),
            new_tab: false,
            show_on_mobile: true,
        },
        NavLinkRecord {
            label: "Blog".to_string(),
            url: "/blog".to_string(),
            new_tab: false,
            show_on_mobile: true,
        },
        NavLinkRecord {
            label: "Gallery".to_string(),
            url: "/gallery".to_string(),
            new_tab: false,
            show_on_mobile: false,
        },
    ]
}

pub fn footer_links() -> Vec<NavLinkRecord> {
    vec![
        NavLinkRecord {
            label: "Blog".to_string(),
            url: "/blog".to_string(),
            new_tab: false,
            show_on_mobile: true,
        },
        NavLinkRecord {
            label: "Gallery".to_string(),
            url: "/gallery".to_string(),
            new_tab: false,
            show_on_mobile: true,
        },
        NavLinkRecord {
            label: "GitHub".to_string(),
            url: "https://github.com/srjaykikani".to_string(),
            new_tab: true,
            show_on_mobile: true,
        },
    ]
}
