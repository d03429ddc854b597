//! Built-in portfolio content.
//!
//! Served whenever the store has nothing for a content type, and written to
//! the store by the seeding transaction. Every function here is pure: the
//! same settings always produce the same records, ids included.

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::content::domain::{Experience, PersonalInfo, Project, Skill, PERSONAL_INFO_ID};
use crate::modules::settings::application::Settings;

/// 2024-01-01T00:00:00Z
const SEED_EPOCH_SECS: i64 = 1_704_067_200;

/// Creation time given to a seeded project.
///
/// Lower ids are newer, so "featured first, newest first" lists seeded
/// projects in the same order as [`fallback_projects`].
pub fn seeded_created_at(project_id: i32) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH_SECS - i64::from(project_id), 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const BIO: &str = "I'm a passionate and enthusiastic professional Customer Service with hands-on experience over 2 years in the IT.
Has a deep love for WordPress and all things related to website development and troubleshooting.
With a keen interest in managing and fixing website errors, especially those involving WordPress, Laravel, and CodeIgniter, I'm excels in ensuring smooth and efficient website performance.
My expertise in web hosting and domain management is complemented by my critical problem-solving skills. Known for thinking outside the box, I approaches challenges from various perspectives to find innovative solutions.
This unique approach not only resolves issues efficiently but also enhances the overall functionality of websites.";

pub fn fallback_personal_info(settings: &Settings) -> PersonalInfo {
    let site = &settings.site;

    PersonalInfo {
        id: PERSONAL_INFO_ID,
        full_name: site.default_name.clone(),
        title: site.portal_description.clone(),
        bio: BIO.to_string(),
        location: site.default_location.clone(),
        email: site.default_email.clone(),
        phone: site.default_phone.clone(),
        github_url: site.default_github.clone(),
        linkedin_url: site.default_linkedin.clone(),
    }
}

pub fn fallback_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: 1,
            job_title: "Customer Care".to_string(),
            company: "CV. Jogjacamp".to_string(),
            start_date: NaiveDate::from_ymd_opt(2022, 10, 1),
            end_date: None,
            description: "Assist and guide customers of IDwebhost, Resellercamp, and Jogjacamp \
                          to ensure their services operate smoothly and without issues."
                .to_string(),
            achievements: strings(&[
                "Managed a high volume of customer inquiries with efficiency and professionalism through Live Chat and Whatsapp",
                "Assist IDwebhost and Diskon.com customers to aid their issues related to websites, hosting, domains, email, and/or related issues",
                "Assist Resellercamp customers in resolving issues and processing reseller account deposits.",
                "Provided timely solutions to customer issues, enhancing overall satisfaction",
                "Utilize knowledge of domain, hosting, website, and server management to assist customers effectively",
                "Do Live Streaming in Tiktok and Instagram to reach and assist more customers for IDwebhost in real-time",
            ]),
            is_current: true,
        },
        Experience {
            id: 2,
            job_title: "Owner".to_string(),
            company: "Store Dot2".to_string(),
            start_date: NaiveDate::from_ymd_opt(2017, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2022, 1, 1),
            description: "Own and manage the online store Store Dot2 to market digital products \
                          and in-game items."
                .to_string(),
            achievements: strings(&[
                "Manage sales across various platforms such as Itemku, Bitskins, PlayerAuction, G2G, Instagram, and other online platforms.",
                "Ensure product inventory is always well-maintained and available.",
                "Run advertising campaigns on marketplaces to increase product exposure.",
                "Process customer orders and provide after-sales service.",
            ]),
            is_current: false,
        },
    ]
}

/// Featured projects come first, in the order the listing shows them.
pub fn fallback_projects() -> Vec<Project> {
    let project = |id: i32,
                   title: &str,
                   description: &str,
                   technologies: &[&str],
                   project_url: &str,
                   github_url: &str,
                   image: &str,
                   featured: bool| Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        project_url: project_url.to_string(),
        github_url: github_url.to_string(),
        image_url: Some(format!("/img/showcase/{image}.webp")),
        featured,
    };

    vec![
        project(
            1,
            "WPGan.com",
            "WPGan.com is one of my blog to share about my experiences when facing error or a cheat \
             when developing or troubleshooting websites and servers (VPS) especially when using \
             WordPress, cPanel, and Linux server.",
            &["WordPress", "CloudFlare"],
            "https://wpgan.com",
            "",
            "wpgan",
            true,
        ),
        project(
            2,
            "PRIFITRA",
            "PRIFITRA is a web-based application that lets you migrate data across server, \
             especially designed if your hosting doesn't support SSH.",
            &["Javascript", "CSS", "Native PHP"],
            "https://github.com/mnasikin/prifitra",
            "https://github.com/mnasikin/prifitra",
            "prifitra",
            true,
        ),
        project(
            3,
            "BtW Importer",
            "A powerful yet simple migration tool (plugin), BtW Importer helps you seamlessly \
             transfer posts, images, and formatting from Blogger (Blogspot) to WordPress. Whether \
             you're a casual blogger or managing a large archive, this plugin handles the complex \
             parts so you don't have to.",
            &["PHP", "Javascript", "CSS"],
            "https://wordpress.org/plugins/btw-importer/",
            "https://github.com/mnasikin/btw-importer",
            "btw-importer",
            true,
        ),
        project(
            4,
            "Profee",
            "A full-stack portfolio starter built with Next.js 15 (App Router), TypeScript, and \
             Tailwind + shadcn/ui on the front-end, backed by Prisma and SQLite.",
            &["Next.js", "TypeScript", "Tailwind CSS", "shadcn/ui", "Prisma", "SQLite"],
            "https://nasikin.web.id",
            "https://github.com/mnasikin/Profee",
            "profee",
            true,
        ),
        project(
            5,
            "Ezha",
            "A simple and lightwight plugin designed to effortlessly integrate share buttons \
             adorned with captivating Font Awesome icons into your single posts and pages.",
            &["PHP", "CSS", "Javascript"],
            "https://wordpress.org/plugins/ezsha/",
            "https://github.com/mnasikin/Ezsha",
            "ezsha",
            false,
        ),
        project(
            6,
            "Propagasi Web",
            "A website based appliaction to check DNS propagation from many Indonesia public DNS \
             server, Global DNS server, and WHOIS Check.",
            &["Codeigniter", "RDAP", "WHOIS"],
            "https://propagasi.web.id/",
            "",
            "propagasi",
            false,
        ),
        project(
            7,
            "PRIFITRA - Landing Page",
            "A landing page built with basic CSS and HTML for PRIFITRA application.",
            &["CSS", "HTML", "Javascript"],
            "https://github.com/mnasikin/Prifitra-Landing-Page",
            "https://github.com/mnasikin/Prifitra-Landing-Page",
            "prifitra-lp",
            false,
        ),
        project(
            8,
            "Carimonitor",
            "Websites for checking specifications and comparing monitors available in the \
             Indonesian market.",
            &["Laravel", "Tailwind CSS"],
            "https://carimonitor.web.id",
            "",
            "carimonitor",
            false,
        ),
    ]
}

/// Strongest skills first. Ids 4 and 13 are retired and stay unused.
pub fn fallback_skills() -> Vec<Skill> {
    let rows: [(i32, &str, &str, i32, bool); 13] = [
        (1, "WordPress Management", "Experienced", 5, true),
        (2, "WordPress Troubleshooting", "Experienced", 5, true),
        (3, "CloudFlare Management", "Experienced", 5, true),
        (5, "Domain & Hosting", "Advanced", 4, true),
        (6, "Website Troubleshooting", "Advanced", 4, true),
        (7, "On-Page SEO", "Advanced", 4, true),
        (8, "WHM/cPanel", "Advanced", 4, true),
        (9, "Linux Server", "Intermediate", 3, true),
        (10, "Problem Solving", "Soft Skills", 2, false),
        (11, "Team Collaboration", "Soft Skills", 2, false),
        (12, "Communication", "Soft Skills", 2, false),
        (14, "Adaptability", "Soft Skills", 2, false),
        (15, "Critical Thinking", "Soft Skills", 2, false),
    ];

    rows.iter()
        .map(|&(id, name, category, proficiency_level, is_technical)| Skill {
            id,
            name: name.to_string(),
            category: category.to_string(),
            proficiency_level,
            is_technical,
        })
        .collect()
}

/// Everything the seeding transaction writes.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackDataset {
    pub personal_info: Option<PersonalInfo>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl FallbackDataset {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            personal_info: Some(fallback_personal_info(settings)),
            experiences: fallback_experiences(),
            projects: fallback_projects(),
            skills: fallback_skills(),
        }
    }
}
