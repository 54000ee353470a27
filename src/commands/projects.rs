//! List the project gallery

use anyhow::Result;

use crate::content::CategoryFilter;
use crate::projects;

/// List projects in the selected category
pub fn run(filter: CategoryFilter) -> Result<()> {
    let selected = projects::filter(filter);
    if selected.is_empty() {
        println!("No projects found with the selected filter.");
        return Ok(());
    }

    println!("Projects ({}):", selected.len());
    for project in selected {
        println!("  {} [{}] {}", project.title, project.id, project.category);
        println!("    {}", project.description);
        println!("    tags: {}", project.tags.join(", "));
    }
    Ok(())
}
