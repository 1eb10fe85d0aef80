//! Category CLI commands

use clap::Subcommand;

use crate::dashboard::Dashboard;
use crate::display::format_category_list;
use crate::error::WeddingResult;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List built-in and custom categories
    List,

    /// Add a custom category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a custom category (expenses keep their category name)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(dashboard: &mut Dashboard, cmd: CategoryCommands) -> WeddingResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&dashboard.category_choices()));
        }

        CategoryCommands::Add { name } => {
            let id = dashboard.add_category(&name)?;
            println!("Added category: {}", name.trim());
            println!("  ID: {}", id);
        }

        CategoryCommands::Delete { category } => {
            let name = dashboard.find_category(&category).map(|c| c.name.clone());
            dashboard.delete_category(&category)?;
            println!("Deleted category: {}", name.unwrap_or(category));
        }
    }

    Ok(())
}
