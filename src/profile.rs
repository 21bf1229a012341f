//! Hand-authored site content. Everything here is fixed at build time; the
//! components treat it as a read-only data source.

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub site_url: &'static str,
    pub keywords: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Daniel Churchill",
    initials: "DC",
    role: "Software Developer",
    tagline: "I build robust, user-friendly web applications with modern \
              technologies, specializing in fullstack development with React, \
              NestJS, and TypeScript.",
    location: "Abuja, Nigeria",
    email: "churchilldaniel687@gmail.com",
    site_url: "https://chukwunonsoprosper.live",
    keywords: "Software developer, web developer, react developer, NestJs, \
               ExpressJs, PostgreSQL, Prisma, typescript, churchill, daniel",
};

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "With a strong foundation in both frontend and backend technologies, I \
     transform ideas into scalable, maintainable code. My repositories \
     showcase a commitment to clean architecture and continuous improvement \
     across projects ranging from intuitive user interfaces to powerful APIs.",
    "My technical journey is driven by curiosity and problem-solving. I've \
     built applications from real-time chat systems to text-transformation \
     tools, always prioritizing code quality and user experience.",
    "When not coding, I explore emerging technologies, contribute to \
     open-source projects, and share insights about software development. \
     I'm particularly interested in system architecture, performance \
     optimization, and creating accessible web experiences.",
];

/// Icon-font classes, resolved once at configuration time. Replaces the kind
/// of stringly-typed component lookup that silently renders nothing for a
/// typo'd key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
    Link,
    Html,
    Css,
    JavaScript,
    TypeScript,
    React,
    NodeJs,
    Express,
    MongoDb,
    Git,
    Tailwind,
    PostgreSql,
    NestJs,
    Prisma,
    SocketIo,
    Linux,
    Jest,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::GitHub => "devicon-github-plain",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Email => "extra-email",
            Icon::Link => "extra-link",
            Icon::Html => "devicon-html5-plain",
            Icon::Css => "devicon-css3-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::TypeScript => "devicon-typescript-plain",
            Icon::React => "devicon-react-original",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::Express => "devicon-express-original",
            Icon::MongoDb => "devicon-mongodb-plain",
            Icon::Git => "devicon-git-plain",
            Icon::Tailwind => "devicon-tailwindcss-original",
            Icon::PostgreSql => "devicon-postgresql-plain",
            Icon::NestJs => "devicon-nestjs-original",
            Icon::Prisma => "devicon-prisma-original",
            Icon::SocketIo => "devicon-socketio-original",
            Icon::Linux => "devicon-linux-plain",
            Icon::Jest => "devicon-jest-plain",
        }
    }

    /// Lookup for keys arriving as strings (e.g. lifted from older content
    /// files). Unknown keys fall back to the generic link glyph.
    pub fn from_key(key: &str) -> Icon {
        match key {
            "github" => Icon::GitHub,
            "linkedin" => Icon::LinkedIn,
            "twitter" => Icon::Twitter,
            "email" | "mail" => Icon::Email,
            _ => Icon::Link,
        }
    }
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/Chu-rill",
        icon: Icon::GitHub,
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/churchill-daniel-b66a752a7/",
        icon: Icon::LinkedIn,
    },
    SocialLink {
        name: "Twitter",
        url: "https://x.com/chu_rill",
        icon: Icon::Twitter,
    },
    SocialLink {
        name: "Email",
        url: "mailto:churchilldaniel687@gmail.com",
        icon: Icon::Email,
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "InnkeeperPro",
        description: "A fullstack hotel management system for browsing listed \
                      hotels and rooms and making bookings, with an admin \
                      dashboard.",
        tags: &["React", "NestJs", "PostgreSQL", "Tailwind", "Prisma"],
        demo_url: "https://innkeeperpro.vercel.app/",
        code_url: "https://github.com/Chu-rill/hotel-management-client",
    },
    Project {
        title: "Recapify",
        description: "A text transformation tool for summarizing, paraphrasing, \
                      and generating text, with downloadable TTS audio and a \
                      friendly React interface.",
        tags: &["React", "NestJs", "PostgreSQL", "Gemini", "TypeScript"],
        demo_url: "https://recapify-omega.vercel.app/",
        code_url: "https://github.com/Chu-rill/Recapify",
    },
    Project {
        title: "ChatSpace",
        description: "A real-time fullstack chat application built on React, \
                      Express, and MongoDB, with serverless functions hosted \
                      on Google Cloud.",
        tags: &["React", "Express", "MongoDB", "Socket.IO"],
        demo_url: "https://chat-space-sand.vercel.app/",
        code_url: "https://github.com/Chu-rill/ChatSpace",
    },
    Project {
        title: "Trivio",
        description: "A fullstack quiz application where users create quizzes \
                      and answer questions across categories, with score \
                      tracking and a leaderboard.",
        tags: &["React", "MongoDB", "Express"],
        demo_url: "https://trivio-chi.vercel.app/",
        code_url: "https://github.com/Chu-rill/Quiz_app",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
        }
    }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Frontend,
    SkillCategory::Backend,
    SkillCategory::Tools,
];

pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    pub category: SkillCategory,
    pub proficiency: u8,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "HTML",
        icon: Icon::Html,
        category: SkillCategory::Frontend,
        proficiency: 95,
    },
    Skill {
        name: "CSS",
        icon: Icon::Css,
        category: SkillCategory::Frontend,
        proficiency: 90,
    },
    Skill {
        name: "JavaScript",
        icon: Icon::JavaScript,
        category: SkillCategory::Frontend,
        proficiency: 92,
    },
    Skill {
        name: "TypeScript",
        icon: Icon::TypeScript,
        category: SkillCategory::Frontend,
        proficiency: 88,
    },
    Skill {
        name: "React",
        icon: Icon::React,
        category: SkillCategory::Frontend,
        proficiency: 90,
    },
    Skill {
        name: "TailwindCSS",
        icon: Icon::Tailwind,
        category: SkillCategory::Frontend,
        proficiency: 92,
    },
    Skill {
        name: "Node.js",
        icon: Icon::NodeJs,
        category: SkillCategory::Backend,
        proficiency: 85,
    },
    Skill {
        name: "Express",
        icon: Icon::Express,
        category: SkillCategory::Backend,
        proficiency: 87,
    },
    Skill {
        name: "NestJs",
        icon: Icon::NestJs,
        category: SkillCategory::Backend,
        proficiency: 83,
    },
    Skill {
        name: "MongoDB",
        icon: Icon::MongoDb,
        category: SkillCategory::Backend,
        proficiency: 82,
    },
    Skill {
        name: "PostgreSQL",
        icon: Icon::PostgreSql,
        category: SkillCategory::Backend,
        proficiency: 78,
    },
    Skill {
        name: "Prisma",
        icon: Icon::Prisma,
        category: SkillCategory::Backend,
        proficiency: 80,
    },
    Skill {
        name: "Socket.IO",
        icon: Icon::SocketIo,
        category: SkillCategory::Backend,
        proficiency: 79,
    },
    Skill {
        name: "Git",
        icon: Icon::Git,
        category: SkillCategory::Tools,
        proficiency: 89,
    },
    Skill {
        name: "Linux",
        icon: Icon::Linux,
        category: SkillCategory::Tools,
        proficiency: 75,
    },
    Skill {
        name: "Jest",
        icon: Icon::Jest,
        category: SkillCategory::Tools,
        proficiency: 76,
    },
];

pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        role: "Senior Frontend Developer",
        company: "Tech Innovations Inc.",
        period: "Jan 2022 - Present",
        highlights: &[
            "Led a team of 5 developers building and maintaining multiple web applications",
            "Implemented modern UI/UX designs using React and TailwindCSS",
            "Optimized application performance, cutting load time by 40%",
            "Collaborated with design and backend teams on seamless integrations",
        ],
    },
    ExperienceItem {
        role: "Frontend Developer",
        company: "Digital Solutions LLC",
        period: "Mar 2020 - Dec 2021",
        highlights: &[
            "Developed responsive web applications using React and TypeScript",
            "Implemented state management with Redux and Context API",
            "Created reusable component libraries for faster development",
            "Participated in code reviews and mentored junior developers",
        ],
    },
    ExperienceItem {
        role: "Web Developer Intern",
        company: "StartUp Ventures",
        period: "Jun 2019 - Feb 2020",
        highlights: &[
            "Assisted in developing and maintaining company websites",
            "Created responsive layouts with HTML, CSS, and JavaScript",
            "Collaborated with senior developers on feature implementation",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_key_falls_back_to_link() {
        assert_eq!(Icon::from_key("github"), Icon::GitHub);
        assert_eq!(Icon::from_key("mastodon"), Icon::Link);
        assert_eq!(Icon::from_key(""), Icon::Link);
    }

    #[test]
    fn test_every_skill_has_a_listed_category() {
        for skill in SKILLS {
            assert!(
                SKILL_CATEGORIES.contains(&skill.category),
                "{} has an unlisted category",
                skill.name
            );
        }
    }

    #[test]
    fn test_proficiency_is_a_percentage() {
        for skill in SKILLS {
            assert!(skill.proficiency <= 100, "{} overflows", skill.name);
        }
    }
}
