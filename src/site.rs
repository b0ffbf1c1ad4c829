//! Inert content for the portfolio page sections.
//!
//! Data only. Layout, styling, animation, and responsive navigation belong
//! to whatever surface renders this — the content model stays the same
//! whether that surface is a browser, a terminal, or a JSON endpoint.

use serde::Serialize;

/// Everything the page sections display.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Roles cycled in the hero banner.
    pub hero_roles: Vec<&'static str>,
    pub tagline: &'static str,
    pub about: Vec<&'static str>,
    pub stats: Vec<Stat>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub social: Vec<SocialLink>,
    pub contact: ContactChannels,
}

/// One headline figure in the about section.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub status: &'static str,
    pub summary: &'static str,
    pub highlights: Vec<&'static str>,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Direct contact channels shown next to the form.
#[derive(Debug, Clone, Serialize)]
pub struct ContactChannels {
    pub email: &'static str,
    pub phone: &'static str,
}

impl Profile {
    /// The published profile content.
    pub fn standard() -> Self {
        Self {
            name: "Jignesh Nakum",
            hero_roles: vec!["Software Engineer", "Web Developer"],
            tagline: "Crafting digital experiences with code and creativity. \
                      Let's build something amazing together.",
            about: vec![
                "I'm a passionate Software Engineer with over 1.5 years of experience \
                 in building modern, high-performance web applications, specializing \
                 in the MERN stack with a strong focus on React.js development and \
                 frontend architecture.",
                "During my time at Ciphernutz IT Services, I worked on scalable web \
                 solutions that delivered seamless user experiences across devices, \
                 collaborated with cross-functional teams, and followed Agile \
                 development practices.",
                "What drives me is turning complex problems into clean, functional, \
                 and intuitive user interfaces. I'm currently open to freelance \
                 opportunities.",
            ],
            stats: vec![
                Stat { value: "1.5+", label: "Years Experience" },
                Stat { value: "5+", label: "Projects Completed" },
                Stat { value: "5+", label: "Technologies Mastered" },
            ],
            education: vec![
                Education {
                    degree: "Master of Computer Applications (MCA)",
                    school: "Dharmsinh Desai University (DDU)",
                    years: "2023 – 2025",
                },
                Education {
                    degree: "Bachelor of Computer Applications (BCA)",
                    school: "Veer Narmad South Gujarat University (VNSGU)",
                    years: "2020 – 2023",
                },
            ],
            skills: vec![
                SkillGroup {
                    title: "Frontend",
                    items: "React.js, Next.js, HTML5, CSS3, JavaScript, TypeScript, \
                            Bootstrap, Tailwind CSS",
                },
                SkillGroup {
                    title: "Backend & Database",
                    items: "Node.js, Express.js, MongoDB, MySQL, REST APIs, Swagger",
                },
                SkillGroup {
                    title: "CMS & Platforms",
                    items: "WordPress, Content Management Systems",
                },
                SkillGroup {
                    title: "Version Control",
                    items: "Git, GitHub, GitLab, Git Workflow",
                },
                SkillGroup {
                    title: "Development Tools",
                    items: "VS Code, Postman, Docker, API Testing",
                },
                SkillGroup {
                    title: "Other Skills",
                    items: "Responsive Design, UI/UX, Agile, Problem Solving",
                },
            ],
            projects: vec![Project {
                name: "Sudarshan Services",
                subtitle: "Frozen Foods and Products",
                status: "Successfully Delivered",
                summary: "A complete web presence for Sudarshan Services, a company \
                          involved in supply chain management, agro exports, frozen \
                          food distribution, and industrial chemical trading.",
                highlights: vec![
                    "Showcased company profile and multi-industry services using React.js",
                    "Built dynamic pages for key verticals: Agro products, Frozen foods, \
                     Chemical trading, and International logistics",
                    "Integrated modern UI to enhance user engagement",
                    "Delivered and deployed for the client's stakeholders",
                ],
                url: "https://sudarshanservices.com/",
            }],
            social: vec![
                SocialLink {
                    label: "GitHub",
                    url: "https://github.com/JigneshNakum16",
                },
                SocialLink {
                    label: "LinkedIn",
                    url: "https://www.linkedin.com/in/jignesh-nakum-211683231",
                },
                SocialLink {
                    label: "Twitter",
                    url: "https://x.com/Jignesh08155221",
                },
            ],
            contact: ContactChannels {
                email: "jigneshnakum16@gmail.com",
                phone: "+91 9712157194",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONTACT_RECIPIENT;

    #[test]
    fn test_standard_profile_sections_populated() {
        let profile = Profile::standard();
        assert_eq!(profile.hero_roles, vec!["Software Engineer", "Web Developer"]);
        assert_eq!(profile.stats.len(), 3);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.skills.len(), 6);
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.social.len(), 3);
    }

    #[test]
    fn test_contact_email_matches_fallback_recipient() {
        // The mailto fallback defaults to the address displayed on the page.
        assert_eq!(Profile::standard().contact.email, DEFAULT_CONTACT_RECIPIENT);
    }

    #[test]
    fn test_profile_serializes() {
        let json = serde_json::to_value(Profile::standard()).unwrap();
        assert_eq!(json["name"], "Jignesh Nakum");
        assert_eq!(json["education"][0]["school"], "Dharmsinh Desai University (DDU)");
    }
}
