use super::{Feature, Project, ProjectStatus, TechItem};
use crate::tags::{ColorTag, IconTag};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn feature(icon: IconTag, title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_owned(),
        description: description.to_owned(),
        icon,
    }
}

fn tech(icon: IconTag, name: &str, description: &str) -> TechItem {
    TechItem {
        name: name.to_owned(),
        description: description.to_owned(),
        icon,
    }
}

fn hero(asset: &str) -> String {
    format!("/assets/projects/{asset}/hero.jpg")
}

fn gallery(asset: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("/assets/projects/{asset}/screen-{n}.jpg"))
        .collect()
}

fn upcoming(
    title: &str,
    description: &str,
    color: ColorTag,
    icon: IconTag,
    technologies: &[&str],
    asset: &str,
) -> Project {
    Project {
        title: title.to_owned(),
        description: description.to_owned(),
        long_description: description.to_owned(),
        color,
        icon,
        status: ProjectStatus::Upcoming,
        link: None,
        technologies: strings(technologies),
        video_url: None,
        hero_image: hero(asset),
        completion_date: String::from("Coming Soon"),
        duration: String::from("In development"),
        category: String::from("Upcoming"),
        card_tags: Vec::new(),
        highlights: Vec::new(),
        features: Vec::new(),
        tech_stack: Vec::new(),
        gallery: Vec::new(),
    }
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            title: String::from("Corporate Management Portal (SaaS)"),
            description: String::from(
                "Enterprise-grade SaaS solution offering comprehensive business management with \
                 project tracking, contract management, and IoT integration.",
            ),
            long_description: String::from(
                "Features include multi-branch operations, staff management, advanced analytics, \
                 custom reporting, and real-time IoT data visualization. Available as a \
                 subscription-based service with tiered pricing plans.",
            ),
            color: ColorTag::Blue,
            icon: IconTag::Building,
            status: ProjectStatus::Completed,
            link: None,
            technologies: strings(&[
                "React",
                "Supabase",
                "TypeScript",
                "IoT",
                "Analytics",
                "Stripe",
            ]),
            video_url: None,
            hero_image: hero("corporate-portal"),
            completion_date: String::from("2024"),
            duration: String::from("8 months"),
            category: String::from("SaaS Platform"),
            card_tags: vec![
                (IconTag::Users, String::from("Project & Contract Management")),
                (IconTag::TrendingUp, String::from("IoT & Analytics")),
            ],
            highlights: strings(&[
                "Multi-branch operations from a single tenant",
                "Real-time IoT dashboards for connected equipment",
                "Tiered subscription billing",
                "Custom report builder with export",
            ]),
            features: vec![
                feature(
                    IconTag::Layout,
                    "Project Tracking",
                    "Milestones, task boards and progress reporting across every branch.",
                ),
                feature(
                    IconTag::FileText,
                    "Contract Management",
                    "Contract lifecycle with renewals, reminders and document storage.",
                ),
                feature(
                    IconTag::Monitor,
                    "IoT Visualization",
                    "Live sensor feeds rendered as charts and alerts.",
                ),
                feature(
                    IconTag::Lock,
                    "Role-Based Access",
                    "Fine-grained permissions for staff, managers and administrators.",
                ),
            ],
            tech_stack: vec![
                tech(IconTag::Code, "React", "Component-based frontend in TypeScript."),
                tech(
                    IconTag::Database,
                    "Supabase",
                    "Postgres storage, auth and row-level security.",
                ),
                tech(IconTag::Zap, "Stripe", "Subscription billing and invoicing."),
            ],
            gallery: gallery("corporate-portal", 3),
        },
        Project {
            title: String::from("Invoice Approval System"),
            description: String::from(
                "Advanced invoice processing system with OCR capabilities for supervisors.",
            ),
            long_description: String::from(
                "Features automated data extraction, approval workflows, and integration with \
                 Google Drive for document management.",
            ),
            color: ColorTag::Emerald,
            icon: IconTag::Zap,
            status: ProjectStatus::Completed,
            link: None,
            technologies: strings(&["Custom Framework", "Flask", "OCR", "Google Sheets"]),
            video_url: None,
            hero_image: hero("invoice-approval"),
            completion_date: String::from("2023"),
            duration: String::from("4 months"),
            category: String::from("Automation"),
            card_tags: vec![
                (IconTag::BarChart, String::from("Automated Processing")),
                (IconTag::Shield, String::from("Google Drive Integration")),
            ],
            highlights: strings(&[
                "OCR extraction of invoice totals, dates and vendors",
                "Multi-step supervisor approval workflow",
                "Originals archived to Google Drive automatically",
            ]),
            features: vec![
                feature(
                    IconTag::FileText,
                    "OCR Extraction",
                    "Scanned invoices are read and turned into structured records.",
                ),
                feature(
                    IconTag::Users,
                    "Approval Workflow",
                    "Supervisors approve or reject with comments and an audit trail.",
                ),
                feature(
                    IconTag::Cloud,
                    "Drive Archive",
                    "Every invoice is filed in a shared Google Drive folder.",
                ),
            ],
            tech_stack: vec![
                tech(IconTag::Server, "Flask", "Python backend serving the approval portal."),
                tech(IconTag::FileText, "OCR", "Text extraction from scanned documents."),
                tech(
                    IconTag::Database,
                    "Google Sheets",
                    "Lightweight storage for invoice records.",
                ),
            ],
            gallery: gallery("invoice-approval", 3),
        },
        Project {
            title: String::from("Enterprise Portal System"),
            description: String::from(
                "Integrated portal system for suppliers, drivers, and supervisors with real-time \
                 tracking.",
            ),
            long_description: String::from(
                "Data visualization and comprehensive reporting capabilities using Google Sheets \
                 for data management.",
            ),
            color: ColorTag::Amber,
            icon: IconTag::Database,
            status: ProjectStatus::Completed,
            link: None,
            technologies: strings(&["Custom Framework", "Flask", "Google Sheets", "Google Drive"]),
            video_url: None,
            hero_image: hero("enterprise-portal"),
            completion_date: String::from("2023"),
            duration: String::from("6 months"),
            category: String::from("Business Portal"),
            card_tags: vec![
                (IconTag::Globe, String::from("Multi-role Access")),
                (IconTag::Settings, String::from("Google Integration")),
            ],
            highlights: strings(&[
                "Separate portals for suppliers, drivers and supervisors",
                "Real-time delivery tracking",
                "Reports generated straight from the shared sheets",
            ]),
            features: vec![
                feature(
                    IconTag::Globe,
                    "Role Portals",
                    "Each role gets its own entry point and views.",
                ),
                feature(
                    IconTag::Smartphone,
                    "Driver Tracking",
                    "Drivers report status from their phones in the field.",
                ),
                feature(
                    IconTag::BarChart,
                    "Reporting",
                    "Charts and summaries for supervisors.",
                ),
            ],
            tech_stack: vec![
                tech(IconTag::Server, "Flask", "Python backend for all portals."),
                tech(IconTag::Database, "Google Sheets", "Shared data store for operations."),
                tech(IconTag::Cloud, "Google Drive", "Document storage."),
            ],
            gallery: gallery("enterprise-portal", 3),
        },
        Project {
            title: String::from("Professional Form System"),
            description: String::from(
                "Custom form management system with Flask backend for professional client data \
                 collection.",
            ),
            long_description: String::from(
                "Features dynamic form generation, data validation, and seamless Google Sheets \
                 integration for data storage.",
            ),
            color: ColorTag::Purple,
            icon: IconTag::BarChart,
            status: ProjectStatus::Completed,
            link: None,
            technologies: strings(&["Custom Framework", "Flask", "Google Sheets", "Google Drive"]),
            video_url: None,
            hero_image: hero("form-system"),
            completion_date: String::from("2022"),
            duration: String::from("3 months"),
            category: String::from("Data Collection"),
            card_tags: vec![
                (IconTag::TrendingUp, String::from("Dynamic Forms")),
                (IconTag::Users, String::from("Google Integration")),
            ],
            highlights: strings(&[
                "Forms generated from a declarative definition",
                "Server-side validation of every submission",
                "Responses land directly in Google Sheets",
            ]),
            features: vec![
                feature(
                    IconTag::Layout,
                    "Dynamic Forms",
                    "New forms without new code.",
                ),
                feature(
                    IconTag::Shield,
                    "Validation",
                    "Typed fields checked before anything is stored.",
                ),
            ],
            tech_stack: vec![
                tech(IconTag::Server, "Flask", "Python backend rendering the forms."),
                tech(IconTag::Database, "Google Sheets", "Response storage."),
            ],
            gallery: gallery("form-system", 2),
        },
        upcoming(
            "Web-Based POS System",
            "Cloud-based Point of Sale system requiring no software installation or dedicated \
             hardware. Features comprehensive inventory management, transaction processing, and \
             advanced business analytics with interactive visualizations.",
            ColorTag::Blue,
            IconTag::Database,
            &["Web-Based", "Cloud Storage", "Real-time Analytics", "Inventory Management"],
            "pos-system",
        ),
        upcoming(
            "Small Business Management App",
            "Integrated business management solution for small businesses. Features staff \
             management, transaction tracking, and seamless integration with existing POS \
             systems. Includes advanced data visualization for business insights.",
            ColorTag::Emerald,
            IconTag::Building,
            &["POS Integration", "Staff Management", "Data Analytics", "Business Intelligence"],
            "business-app",
        ),
        upcoming(
            "Course Learning Platform",
            "User-friendly platform for hosting and accessing online courses. Features intuitive \
             course management, progress tracking, and interactive learning tools. Designed for \
             both course creators and learners.",
            ColorTag::Amber,
            IconTag::Book,
            &["Course Management", "Progress Tracking", "Interactive Learning", "Content Delivery"],
            "course-platform",
        ),
        upcoming(
            "Medical Connection Platform",
            "Comprehensive platform connecting patients with healthcare providers. Features full \
             clinic management capabilities, appointment scheduling, patient records, and secure \
             communication channels.",
            ColorTag::Purple,
            IconTag::Heart,
            &["Clinic Management", "Patient Portal", "Appointment System", "Medical Records"],
            "medical-platform",
        ),
    ]
}
