use crate::tags::{ColorTag, IconTag};

// static site content
//
// copy that the home page renders as-is.  project records live in the catalog instead

pub const OWNER_NAME: &str = "Mohammad Alarabiat";
pub const HEADLINE: &str = "Software Engineer";
pub const HEADLINE_ACCENT: &str = "& Business Innovator";
pub const TAGLINE: &str = "Specializing in business portals and automation solutions that \
                           transform how companies operate and scale";
pub const FOOTER_LINE: &str = "Transforming businesses through innovative software solutions";

pub const ABOUT_TITLE: &str = "Transforming Business Through Technology";
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "With a solid foundation in software engineering, I specialize in creating sophisticated \
     business portals and automation systems that streamline operations and drive growth.",
    "My expertise lies in understanding complex business requirements and translating them \
     into elegant, scalable software solutions that make a real impact on productivity and \
     efficiency.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub title: &'static str,
    pub caption: &'static str,
    pub icon: IconTag,
    pub color: ColorTag,
}

pub const ABOUT_BADGES: &[Badge] = &[
    Badge {
        title: "Business Portals",
        caption: "Custom enterprise solutions",
        icon: IconTag::Building,
        color: ColorTag::Blue,
    },
    Badge {
        title: "Automation",
        caption: "Process optimization",
        icon: IconTag::Settings,
        color: ColorTag::Emerald,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub text: &'static str,
    pub color: ColorTag,
}

pub const EXPERTISE: &[Bullet] = &[
    Bullet { text: "Software Engineering Degree", color: ColorTag::Blue },
    Bullet { text: "Business Process Analysis", color: ColorTag::Emerald },
    Bullet { text: "Enterprise Architecture", color: ColorTag::Amber },
    Bullet { text: "System Integration", color: ColorTag::Purple },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: IconTag,
    pub color: ColorTag,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Custom Frameworks",
        icon: IconTag::Code,
        color: ColorTag::Blue,
        skills: &["Custom Web Framework", "Flask", "Python", "JavaScript", "HTML/CSS"],
    },
    SkillGroup {
        title: "Backend & Integration",
        icon: IconTag::Server,
        color: ColorTag::Emerald,
        skills: &[
            "Google Sheets API",
            "Google Drive API",
            "OCR Processing",
            "REST APIs",
            "WebSocket",
        ],
    },
    SkillGroup {
        title: "Business Solutions",
        icon: IconTag::Settings,
        color: ColorTag::Amber,
        skills: &[
            "SaaS Development",
            "Process Automation",
            "Data Analytics",
            "System Integration",
            "Project Management",
        ],
    },
];

pub const AI_TITLE: &str = "Harnessing AI for Business Innovation";
pub const AI_SUMMARY: &str = "Specializing in prompt engineering and AI system development to \
                              create intelligent automation solutions that transform business \
                              operations.";

pub const AI_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Prompt Engineering",
        icon: IconTag::Code,
        color: ColorTag::Purple,
        skills: &["Custom AI Workflows", "Context Optimization"],
    },
    SkillGroup {
        title: "AI Integration",
        icon: IconTag::Zap,
        color: ColorTag::Indigo,
        skills: &["Business Automation", "Process Optimization"],
    },
];

pub const AI_SOLUTIONS: &[Bullet] = &[
    Bullet { text: "Custom AI Assistants", color: ColorTag::Purple },
    Bullet { text: "Automated Workflows", color: ColorTag::Indigo },
    Bullet { text: "Intelligent Data Processing", color: ColorTag::Purple },
    Bullet { text: "Business Process Automation", color: ColorTag::Indigo },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconTag,
    pub color: ColorTag,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Business Portal Development",
        description: "Custom enterprise portals that unify your business operations and improve \
                      team collaboration.",
        icon: IconTag::Building,
        color: ColorTag::Blue,
    },
    Service {
        title: "Process Automation",
        description: "Streamline workflows and eliminate manual tasks with intelligent \
                      automation solutions.",
        icon: IconTag::Settings,
        color: ColorTag::Emerald,
    },
    Service {
        title: "System Integration",
        description: "Connect disparate systems and ensure seamless data flow across your \
                      organization.",
        icon: IconTag::Database,
        color: ColorTag::Amber,
    },
    Service {
        title: "Business Intelligence",
        description: "Transform data into actionable insights with custom analytics and \
                      reporting platforms.",
        icon: IconTag::BarChart,
        color: ColorTag::Purple,
    },
    Service {
        title: "Security & Compliance",
        description: "Implement robust security measures and ensure regulatory compliance in \
                      all solutions.",
        icon: IconTag::Shield,
        color: ColorTag::Red,
    },
    Service {
        title: "Consulting & Strategy",
        description: "Strategic guidance on digital transformation and technology roadmap \
                      planning.",
        icon: IconTag::Users,
        color: ColorTag::Indigo,
    },
];

pub const CONTACT_PITCH: &str = "Ready to transform your business with cutting-edge technology \
                                 solutions? Let's discuss how we can optimize your operations \
                                 and drive growth.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: IconTag,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: IconTag::Mail,
        label: "Email",
        value: "mohammad@alarabyat.com",
        href: Some("mailto:mohammad@alarabyat.com"),
    },
    ContactChannel {
        icon: IconTag::Phone,
        label: "Phone",
        value: "+962796437884",
        href: Some("tel:+962796437884"),
    },
    ContactChannel {
        icon: IconTag::MapPin,
        label: "Location",
        value: "Amman, Jordan",
        href: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconTag,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: IconTag::Github,
        label: "GitHub",
        href: "https://github.com/conseder",
    },
    SocialLink {
        icon: IconTag::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/mohammad-arabiat-487612329/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_a_distinct_color() {
        let mut colors: Vec<ColorTag> = SERVICES.iter().map(|s| s.color).collect();
        colors.dedup();
        assert_eq!(colors.len(), ColorTag::all().len());
    }

    #[test]
    fn linked_channels_use_matching_schemes() {
        for channel in CONTACT_CHANNELS {
            match (channel.icon, channel.href) {
                (IconTag::Mail, Some(href)) => assert!(href.starts_with("mailto:")),
                (IconTag::Phone, Some(href)) => assert!(href.starts_with("tel:")),
                (_, href) => assert!(href.is_none()),
            }
        }
    }
}
