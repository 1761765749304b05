/// Page content model
///
/// Everything the page shows is fixed at build time. The copy lives in
/// `content/portfolio.json`, compiled into the binary and parsed once at
/// startup; the rest of the app reads these structs and never mutates them.

use serde::Deserialize;

/// The embedded content document.
const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

/// Everything the page renders.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub projects_intro: SectionCopy,
    pub projects: Vec<Project>,
    pub tech_intro: SectionCopy,
    pub tech: Vec<TechCategory>,
    pub contact: Contact,
}

/// Heading and subtitle introducing a section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionCopy {
    pub heading: String,
    pub subtitle: String,
}

/// Hero section copy.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Rendered after `headline` in the accent color.
    pub headline_highlight: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    pub linkedin: Link,
}

/// One big-number stat in the hero (e.g. "99%+" / "Uptime").
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub figure: String,
    pub label: String,
}

/// A showcased project card.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub badge: String,
    pub description: String,
    /// Ordered asset references under the screenshots/ prefix. The gallery
    /// renders these in order; clicking a tile opens the lightbox on it.
    pub gallery: Vec<String>,
    pub metrics: Vec<Metric>,
    pub stack: Vec<String>,
    pub links: Vec<Link>,
}

/// One highlight row on a project card.
#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub icon: String,
    pub label: String,
}

/// A titled group in the tech-stack section.
#[derive(Debug, Clone, Deserialize)]
pub struct TechCategory {
    pub title: String,
    pub items: Vec<String>,
}

/// Contact section copy and links.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub subtitle: String,
    pub links: Vec<Link>,
    pub seeking: Vec<String>,
    pub location: String,
}

/// An outbound link. Static data; the app never follows it, it only copies
/// the URL for the user.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Content {
    /// Parse the embedded document.
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(PORTFOLIO_JSON)
    }

    /// Every gallery reference across all projects, in display order.
    pub fn gallery_references(&self) -> Vec<String> {
        self.projects
            .iter()
            .flat_map(|project| project.gallery.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_content_parses() {
        let content = Content::load().unwrap();
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.tech.is_empty());
        assert!(!content.contact.links.is_empty());
    }

    #[test]
    fn test_galleries_are_nonempty_ordered_and_distinct() {
        let content = Content::load().unwrap();

        for project in &content.projects {
            assert!(
                !project.gallery.is_empty(),
                "{} has an empty gallery",
                project.name
            );

            let distinct: HashSet<&String> = project.gallery.iter().collect();
            assert_eq!(
                distinct.len(),
                project.gallery.len(),
                "{} repeats a gallery reference",
                project.name
            );

            for reference in &project.gallery {
                assert!(
                    reference.starts_with("screenshots/"),
                    "unexpected asset prefix: {}",
                    reference
                );
            }
        }
    }

    #[test]
    fn test_gallery_references_preserve_document_order() {
        let content = Content::load().unwrap();
        let all = content.gallery_references();

        // Flattening must not reorder: the first project's first tile leads.
        assert_eq!(all[0], content.projects[0].gallery[0]);

        let expected: Vec<String> = content
            .projects
            .iter()
            .flat_map(|p| p.gallery.iter().cloned())
            .collect();
        assert_eq!(all, expected);
    }
}
