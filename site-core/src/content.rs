//! Copy and data shown on the page.

use chrono::{Datelike, NaiveDate};

pub const COMPANY_NAME: &str = "NEXTGEN 9 IT SOLUTIONS";
pub const BRAND_MARK: &str = "N9";

/// In page order. These are also the anchor ids.
pub const SECTIONS: [&str; 5] = ["home", "about", "services", "team", "contact"];

pub const FOUNDED_YEAR: i32 = 2025;
pub const FOUNDED_MONTH: u32 = 9;
pub const FOUNDED_DAY: u32 = 25;

pub fn founded_on() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(FOUNDED_YEAR, FOUNDED_MONTH, FOUNDED_DAY)
}

/// Whole calendar years since founding, never negative.
pub fn years_active(today: NaiveDate) -> u64 {
    u64::try_from(today.year() - FOUNDED_YEAR).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SLIDES: [Slide; 8] = [
    Slide {
        title: "Web Systems",
        description: "High-performance platforms engineered for scalability, reliability, and speed.",
    },
    Slide {
        title: "System Development",
        description: "Custom-built information systems tailored to streamline operations and improve efficiency.",
    },
    Slide {
        title: "Cloud Solutions",
        description: "Secure, flexible cloud infrastructure that evolves with your business.",
    },
    Slide {
        title: "Mobile Applications",
        description: "Cross-platform mobile apps designed for performance, usability, and growth.",
    },
    Slide {
        title: "UI / UX Design",
        description: "User-centered designs that create intuitive, engaging, and consistent digital experiences.",
    },
    Slide {
        title: "IT Support",
        description: "Proactive monitoring, maintenance, and expert technical assistance.",
    },
    Slide {
        title: "Network & Infrastructure",
        description: "Reliable network design, setup, and maintenance for secure connectivity.",
    },
    Slide {
        title: "Cybersecurity",
        description: "Modern security strategies to protect systems, data, and users.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// CSS modifier picking the accent gradient.
    pub accent: &'static str,
    pub tags: &'static [&'static str],
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Web Development",
        description: "High-performance, responsive websites and web applications built for scale and reliability.",
        icon: "🌐",
        accent: "orange-amber",
        tags: &["React", "Responsive", "Performance"],
    },
    Service {
        title: "System Development",
        description: "Custom systems engineered around real business workflows and operational needs.",
        icon: "⚙️",
        accent: "amber-green",
        tags: &["Automation", "Integration", "Custom Logic"],
    },
    Service {
        title: "IT Support",
        description: "24/7 monitoring, maintenance, and technical support to keep systems running smoothly.",
        icon: "🛠️",
        accent: "green-orange",
        tags: &["Monitoring", "Maintenance", "Support"],
    },
    Service {
        title: "Networking",
        description: "Secure, fast, and scalable network infrastructure for growing organizations.",
        icon: "📡",
        accent: "orange-green",
        tags: &["Infrastructure", "Security", "Scalability"],
    },
    Service {
        title: "Cloud Solutions",
        description: "Cloud deployment, migration, optimization, and long-term cloud management.",
        icon: "☁️",
        accent: "amber-orange",
        tags: &["Migration", "Hosting", "Optimization"],
    },
    Service {
        title: "Cybersecurity",
        description: "Protection for systems, networks, and data against modern digital threats.",
        icon: "🔐",
        accent: "green-amber",
        tags: &["Data Protection", "Risk Control", "Compliance"],
    },
];

/// Shorter list used in the footer.
pub const FOOTER_SERVICES: [&str; 5] = [
    "Web Development",
    "System Development",
    "Cloud Solutions",
    "IT Support",
    "Cybersecurity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [ValueCard; 4] = [
    ValueCard {
        icon: "🎯",
        title: "Mission",
        description: "Deliver secure, scalable, and reliable digital solutions for growing organizations.",
    },
    ValueCard {
        icon: "🌍",
        title: "Vision",
        description: "Become a trusted long-term technology partner built on quality and trust.",
    },
    ValueCard {
        icon: "💡",
        title: "Innovation",
        description: "Design systems today that remain relevant and effective tomorrow.",
    },
    ValueCard {
        icon: "🤝",
        title: "Commitment",
        description: "Operate with consistency, transparency, and accountability in every project.",
    },
];

pub const WORK_STEPS: [ValueCard; 3] = [
    ValueCard {
        icon: "🧠",
        title: "Understand",
        description: "We begin by deeply understanding your goals, challenges, and users.",
    },
    ValueCard {
        icon: "🛠️",
        title: "Build",
        description: "We design and develop solutions with scalability and reliability in mind.",
    },
    ValueCard {
        icon: "🚀",
        title: "Deliver & Support",
        description: "We deploy, monitor, and continuously improve your systems.",
    },
];

pub const MILESTONES: [(&str, &str); 3] = [
    ("2025", "Company Founded"),
    ("2026", "Enterprise Projects Delivered"),
    ("2027", "Expansion & Partnerships"),
];

pub const ONGOING_PROJECTS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamCategory {
    Leadership,
    Frontend,
    Backend,
}

impl TeamCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TeamCategory::Leadership => "Leadership",
            TeamCategory::Frontend => "Frontend",
            TeamCategory::Backend => "Backend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    All,
    Only(TeamCategory),
}

impl TeamFilter {
    pub const ALL: [TeamFilter; 4] = [
        TeamFilter::All,
        TeamFilter::Only(TeamCategory::Leadership),
        TeamFilter::Only(TeamCategory::Frontend),
        TeamFilter::Only(TeamCategory::Backend),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeamFilter::All => "All",
            TeamFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, member: &TeamMember) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Only(category) => member.category == *category,
        }
    }

    /// Indices into [`TEAM`] of the members this filter shows.
    pub fn apply(&self, members: &[TeamMember]) -> Vec<usize> {
        members
            .iter()
            .enumerate()
            .filter(|(_, member)| self.matches(member))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub category: TeamCategory,
    pub bio: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub website: &'static str,
    pub image: &'static str,
    pub skills: &'static [Skill],
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Tristan Jorge Cuartero",
        role: "Project Leader",
        category: TeamCategory::Leadership,
        bio: "Oversees architecture, planning, and overall system development.",
        email: "tristan.cuartero@horizonit.com",
        github: "https://github.com/krazytristan",
        linkedin: "https://www.linkedin.com/in/tristan-jorge-cuartero/",
        website: "https://personal-website-sage-tau.vercel.app/",
        image: "/team/tristan.png",
        skills: &[
            Skill { name: "System Architecture", level: 90 },
            Skill { name: "React", level: 85 },
            Skill { name: "PHP", level: 80 },
            Skill { name: "Project Management", level: 95 },
        ],
    },
    TeamMember {
        name: "Joseph Rendon Cubio",
        role: "Backend Programmer",
        category: TeamCategory::Backend,
        bio: "Handles backend logic, databases, and API integrations.",
        email: "joseph.cubio@horizonit.com",
        github: "https://github.com",
        linkedin: "https://linkedin.com",
        website: "https://portfolio.joseph.dev",
        image: "/team/cubio.png",
        skills: &[
            Skill { name: "PHP", level: 85 },
            Skill { name: "MySQL", level: 80 },
            Skill { name: "API Development", level: 75 },
        ],
    },
    TeamMember {
        name: "Karlo Keiryl Pitman",
        role: "Backend Programmer",
        category: TeamCategory::Backend,
        bio: "Focuses on system optimization and application logic.",
        email: "karlo.pitman@horizonit.com",
        github: "https://github.com",
        linkedin: "https://linkedin.com",
        website: "https://portfolio.karlo.dev",
        image: "/team/karlo.jpg",
        skills: &[
            Skill { name: "JavaScript", level: 80 },
            Skill { name: "Node.js", level: 75 },
            Skill { name: "Database Design", level: 78 },
        ],
    },
    TeamMember {
        name: "Marvin Paul Orozco",
        role: "Frontend Developer",
        category: TeamCategory::Frontend,
        bio: "Designs and builds modern, responsive user interfaces.",
        email: "marvin.orozco@horizonit.com",
        github: "https://github.com",
        linkedin: "https://linkedin.com",
        website: "https://portfolio.marvin.dev",
        image: "/team/marvin.png",
        skills: &[
            Skill { name: "HTML / CSS", level: 90 },
            Skill { name: "Tailwind CSS", level: 88 },
            Skill { name: "React", level: 82 },
            Skill { name: "UI/UX Design", level: 80 },
        ],
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "📍",
        label: "Office Location",
        value: "Lipa City, Batangas, Philippines",
    },
    ContactDetail {
        icon: "📧",
        label: "Email Address",
        value: "infohorizonitsolutions@gmail.com",
    },
    ContactDetail {
        icon: "📞",
        label: "Phone Number",
        value: "+63 993 220 5328",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    /// Short glyph shown inside the round button.
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 8] = [
    SocialLink { label: "LinkedIn", glyph: "in", href: "#" },
    SocialLink { label: "Facebook", glyph: "f", href: "#" },
    SocialLink { label: "Instagram", glyph: "ig", href: "#" },
    SocialLink { label: "Telegram", glyph: "tg", href: "#" },
    SocialLink { label: "Viber", glyph: "vb", href: "#" },
    SocialLink { label: "Upwork", glyph: "up", href: "#" },
    SocialLink { label: "TikTok", glyph: "tt", href: "#" },
    SocialLink { label: "Email", glyph: "✉", href: "mailto:info@nextgen9.com" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn years_active_counts_calendar_years() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(years_active(day(2025, 10, 1)), 0);
        assert_eq!(years_active(day(2026, 1, 1)), 1);
        assert_eq!(years_active(day(2024, 1, 1)), 0);
        assert_eq!(founded_on(), Some(day(2025, 9, 25)));
    }

    #[test]
    fn filters_select_by_category() {
        assert_eq!(TeamFilter::All.apply(&TEAM), vec![0, 1, 2, 3]);
        assert_eq!(
            TeamFilter::Only(TeamCategory::Backend).apply(&TEAM),
            vec![1, 2]
        );
        assert_eq!(
            TeamFilter::Only(TeamCategory::Frontend).apply(&TEAM),
            vec![3]
        );
        let labels: Vec<_> = TeamFilter::ALL.iter().map(TeamFilter::label).collect();
        assert_eq!(labels, vec!["All", "Leadership", "Frontend", "Backend"]);
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(TEAM
            .iter()
            .flat_map(|member| member.skills)
            .all(|skill| skill.level <= 100));
    }
}
