//! Global command palette entries and filtering.

use crate::model::deal::Deal;
use crate::model::person::Person;
use crate::views::matches_search;
use crate::views::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Navigation,
    Deals,
    People,
}

impl CommandCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Deals => "Deals",
            Self::People => "People",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub name: String,
    pub route: Route,
    pub category: CommandCategory,
}

fn navigation(id: &str, name: &str, route: Route) -> Command {
    Command {
        id: id.to_string(),
        name: name.to_string(),
        route,
        category: CommandCategory::Navigation,
    }
}

/// Fixed navigation entries, then every deal, then every person.
pub fn commands(deals: &[Deal], people: &[Person]) -> Vec<Command> {
    let mut commands = vec![
        navigation("home", "Morning Brief", Route::Home),
        navigation("pipeline", "Pipeline", Route::Pipeline),
        navigation("diligence", "Diligence", Route::Diligence(None)),
        navigation("portfolio", "Portfolio", Route::Portfolio),
        navigation("network", "Network", Route::Network),
        navigation("inbox", "Inbox", Route::Inbox),
    ];
    commands.extend(deals.iter().map(|deal| Command {
        id: deal.id.clone(),
        name: deal.name.clone(),
        route: Route::Diligence(Some(deal.id.clone())),
        category: CommandCategory::Deals,
    }));
    commands.extend(people.iter().map(|person| Command {
        id: person.id.clone(),
        name: person.name.clone(),
        route: Route::Network,
        category: CommandCategory::People,
    }));
    commands
}

/// Commands whose name contains `query`, case-insensitively.
pub fn filter_commands<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    commands
        .iter()
        .filter(|command| matches_search(&command.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{commands, filter_commands, CommandCategory};
    use crate::seed;
    use crate::views::route::Route;

    #[test]
    fn palette_lists_navigation_deals_and_people() {
        let all = commands(&seed::deals(), &seed::people());
        assert_eq!(all.len(), 6 + 3 + 2);
        assert_eq!(all[6].route, Route::Diligence(Some("1".to_string())));
        assert_eq!(all[10].category, CommandCategory::People);
    }

    #[test]
    fn query_matches_across_categories() {
        let all = commands(&seed::deals(), &seed::people());
        let hits = filter_commands(&all, "CHEN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].route, Route::Network);
        assert_eq!(filter_commands(&all, "").len(), all.len());
    }
}
