//! Table rendering for the project listing using tabled.

use tabled::{
    builder::Builder,
    settings::{Modify, Style, object::Columns, width::Width},
};

use crate::content::Project;

/// Maximum width for the description column (characters).
const MAX_DESCRIPTION_WIDTH: usize = 60;

/// Render the project listing as a psql-style table with the columns
/// Project, Description, Role and Stack.
pub fn projects_table(projects: &[Project]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Project", "Description", "Role", "Stack"]);

    for project in projects {
        builder.push_record([
            project.name.to_string(),
            project.description.to_string(),
            project.role.to_string(),
            project.stack.join(", "),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.with(Modify::new(Columns::new(1..=1)).with(Width::wrap(MAX_DESCRIPTION_WIDTH)));

    table.to_string()
}
