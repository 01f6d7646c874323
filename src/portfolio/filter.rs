// SPDX-License-Identifier: MPL-2.0
//! Project category filter.

use super::catalog::Project;

/// Which projects are listed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    /// Show every project.
    #[default]
    All,
    /// Show projects tagged with this category.
    Category(String),
}

impl ProjectFilter {
    /// Returns `true` if the project should be listed under this filter.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.categories.iter().any(|c| c == category),
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Indices of the projects listed under this filter, in catalog order.
    #[must_use]
    pub fn visible_indices(&self, projects: &[Project]) -> Vec<usize> {
        projects
            .iter()
            .enumerate()
            .filter(|(_, project)| self.matches(project))
            .map(|(index, _)| index)
            .collect()
    }
}
