//! Fixed site content. Everything rendered on the page comes from the
//! constants below; nothing here is loaded, fetched, or mutated at runtime.

/// One top-level page section: the anchor id on the rendered element and the
/// label shown in the navbar. Order here is the order on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub static SECTIONS: [Section; 5] = [
    Section { id: "about", label: "About" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "skills", label: "Skills" },
    Section { id: "contact", label: "Contact" },
];

/// Phrases the hero typewriter cycles through.
pub static HERO_ROLES: [&str; 5] = [
    "Full-Stack Developer",
    "MERN Stack Engineer",
    "React Specialist",
    "Python FastAPI Developer",
    "Backend Developer",
];

pub const HERO_EYEBROW: &str = "Available for opportunities";

pub const HERO_INTRO: &str = "2+ years crafting scalable web applications with the MERN stack, \
     Python, and FastAPI. Passionate about backend optimization, clean architecture, and \
     intuitive user experiences.";

pub static HERO_STATS: [(&str, &str); 3] = [
    ("2+", "Years Experience"),
    ("5K+", "Daily Active Users"),
    ("70%", "API Speedup"),
];

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    /// Accent color (hex) for the card edge, bullets, and company line.
    pub accent: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [Job; 1] = [Job {
    role: "Full Stack Developer",
    company: "Jio Platforms Limited",
    period: "January 2024 – Present",
    location: "Navi-Mumbai, Maharashtra",
    accent: "#f59e0b",
    highlights: &[
        "Built Jio Launchpad, an internet-facing centralized authorization and access \
         management platform serving ~5,000 daily active users with role-based visibility \
         and integrated application metadata.",
        "Designed a workflow scheduler using MongoDB and Node.js to automate Python-based \
         data migration scripts from Kafka, Hive, and RDBMS to ADLS, improving operational \
         efficiency by 40%.",
        "Developed a centralized Jio Analytics Dashboard using React and FastAPI to track \
         job executions across multiple teams with job, failure, task-level, and historical \
         analytics.",
        "Optimized backend APIs with MongoDB aggregations and improved SQL queries, reducing \
         API response time by approximately 70%.",
        "Built a library of reusable React and Tailwind CSS components including \
         high-performance Data Tables with server-side filtering, sorting, pagination, and \
         editable rows.",
        "Integrated OIAM-based authentication using SAML and Passport.js, delivering secure \
         enterprise-compliant SSO across applications.",
        "Integrated Azure DevOps REST APIs to automate repository creation, access \
         management, pipeline executions, and deployment log monitoring.",
        "Mentored interns through onboarding, code reviews, and engineering best practices.",
    ],
}];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Accent color (hex) for the tech chips.
    pub accent: &'static str,
    pub tech: &'static [&'static str],
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Agro-Tech Platform",
        description: "B2B & C2C e-commerce platform for agricultural products enabling \
             seamless transactions. Developed and enhanced ML models for crop recommendation, \
             prediction, and disease detection achieving 80–85% accuracy.",
        icon: "🌾",
        accent: "#10b981",
        tech: &["React", "Node.js", "Python", "Machine Learning"],
    },
    Project {
        title: "Face Recognition Attendance",
        description: "Real-time facial recognition system detecting 5–7 faces simultaneously \
             at 90% accuracy, integrated with a secure database for automated attendance \
             tracking.",
        icon: "🎯",
        accent: "#6366f1",
        tech: &["Python", "OpenCV", "Machine Learning"],
    },
];

/// Skill categories in display order (a map would scramble them).
pub static SKILLS: [(&str, &[&str]); 6] = [
    (
        "Languages",
        &["JavaScript (ES6+)", "TypeScript", "Python", "SQL"],
    ),
    (
        "Frontend",
        &["React", "Redux", "Tailwind CSS", "Material UI"],
    ),
    (
        "Backend",
        &["Node.js", "Express.js", "FastAPI", "REST APIs", "Microservices"],
    ),
    ("Databases", &["MongoDB", "PostgreSQL", "MySQL"]),
    (
        "DevOps & Tools",
        &["Azure DevOps", "Git", "CI/CD", "Linux", "Databricks Apps"],
    ),
    ("Security", &["JWT", "SAML SSO", "OAuth", "Passport.js"]),
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub note: &'static str,
}

pub static EDUCATION: Education = Education {
    degree: "B.E. Information Technology",
    school: "Datta Meghe College of Engineering",
    note: "CGPA: 8.25 · 2019 – 2023",
};

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "Software Development Training",
        detail: "Q Spiders · Oct–Dec 2023 · Java, J2EE, SQL, MySQL",
    },
    Certification {
        title: "React Basics Certificate",
        detail: "Meta via Coursera · 2023 · React, Hooks, Component Architecture",
    },
];

pub const CONTACT_INTRO: &str = "I'm currently open to new opportunities. Whether you have a \
     project in mind or just want to connect — my inbox is always open.";

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "tatkariprem6801@gmail.com",
        href: "mailto:tatkariprem6801@gmail.com",
    },
    ContactChannel {
        icon: "📱",
        label: "Phone",
        value: "+91 8806828892",
        href: "tel:+918806828892",
    },
    ContactChannel {
        icon: "💼",
        label: "LinkedIn",
        value: "linkedin.com/prem-tatkari",
        href: "https://linkedin.com/prem-tatkari",
    },
    ContactChannel {
        icon: "🐙",
        label: "GitHub",
        value: "github.com/prem6801-code",
        href: "https://github.com/prem6801-code",
    },
];

pub const FOOTER_LOCATION: &str = "Thane, Maharashtra · India";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_lowercase_anchors() {
        for section in &SECTIONS {
            assert!(!section.id.is_empty());
            assert_eq!(section.id, section.id.to_lowercase());
            assert!(!section.id.contains(' '));
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_hero_roles_nonempty() {
        assert!(!HERO_ROLES.is_empty());
        for role in &HERO_ROLES {
            assert!(!role.is_empty());
        }
    }

    #[test]
    fn test_skill_categories_have_entries() {
        for (category, items) in &SKILLS {
            assert!(!category.is_empty());
            assert!(!items.is_empty());
        }
    }
}
