//! Category display formatting

use crate::models::CategoryChoice;

/// Format the effective category list, marking built-ins
pub fn format_category_list(choices: &[CategoryChoice<'_>]) -> String {
    let name_width = choices
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {}\n",
        "Category",
        "Kind",
        "ID",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:-<12}\n",
        "",
        "",
        "",
        name_width = name_width
    ));

    for choice in choices {
        let (kind, id) = match choice {
            CategoryChoice::Builtin(_) => ("built-in", "-".to_string()),
            CategoryChoice::Custom(category) => ("custom", category.id.to_string()),
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {}\n",
            choice.name(),
            kind,
            id,
            name_width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{category_choices, CategoryId, CustomCategory};
    use chrono::Utc;

    #[test]
    fn test_builtins_then_custom() {
        let custom = vec![CustomCategory {
            id: CategoryId::new(),
            name: "Favors".into(),
            created_at: Utc::now(),
        }];
        let output = format_category_list(&category_choices(&custom));

        let venue = output.find("Venue").unwrap();
        let favors = output.find("Favors").unwrap();
        assert!(venue < favors);
        assert!(output.contains(&custom[0].id.to_string()));
    }
}
