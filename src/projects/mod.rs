//! Project gallery - a fixed showcase filtered by category

use serde::Serialize;

use crate::content::{Category, CategoryFilter};

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "ai-1",
        title: "Neural Network Visualization",
        category: Category::Ai,
        description: "An interactive visualization tool for neural networks that helps explain complex AI concepts to non-technical audiences.",
        image_url: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485",
        tags: &["Machine Learning", "Data Visualization", "Education"],
    },
    Project {
        id: "ai-2",
        title: "Sentiment Analysis Platform",
        category: Category::Ai,
        description: "A platform that analyzes customer feedback across multiple channels to provide actionable insights for businesses.",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
        tags: &["NLP", "Business Intelligence", "Customer Experience"],
    },
    Project {
        id: "body-1",
        title: "Nonverbal Communication Training",
        category: Category::BodyLanguage,
        description: "A comprehensive training program for executives to improve their nonverbal communication skills in professional settings.",
        image_url: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0",
        tags: &["Executive Training", "Communication", "Leadership"],
    },
    Project {
        id: "body-2",
        title: "Micro-Expression Detection Tool",
        category: Category::BodyLanguage,
        description: "Software that helps detect and analyze micro-expressions for research and training purposes.",
        image_url: "https://images.unsplash.com/photo-1489533119213-66a5cd877091",
        tags: &["Facial Recognition", "Psychology", "Research"],
    },
    Project {
        id: "dev-1",
        title: "E-commerce Platform Redesign",
        category: Category::DevDesign,
        description: "A complete redesign and development of an e-commerce platform focused on user experience and conversion optimization.",
        image_url: "https://images.unsplash.com/photo-1523540939399-141cbff6a8d7",
        tags: &["UX/UI", "E-commerce", "Frontend"],
    },
    Project {
        id: "dev-2",
        title: "Mobile App for Health Tracking",
        category: Category::DevDesign,
        description: "A mobile application designed to help users track their health metrics and set wellness goals.",
        image_url: "https://images.unsplash.com/photo-1510511336377-1a9d3abcbd3e",
        tags: &["Mobile Development", "Health Tech", "UX Design"],
    },
];

/// Every project, in gallery order
pub fn all() -> &'static [Project] {
    &PROJECTS
}

/// Projects in the selected category, in gallery order
pub fn filter(category: CategoryFilter) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.matches(p.category))
        .collect()
}

/// Initial filter selected by a URL fragment such as `#body-language`
///
/// Only exact category slugs select a category; anything else shows all.
pub fn filter_from_fragment(fragment: &str) -> CategoryFilter {
    let slug = fragment.trim_start_matches('#');
    Category::ALL
        .into_iter()
        .find(|c| c.slug() == slug)
        .map(CategoryFilter::Only)
        .unwrap_or_default()
}
