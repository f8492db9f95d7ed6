//! Path-based navigation targets.

use crate::model::DealId;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Pipeline,
    /// Optional deal id; `None` shows the first deal.
    Diligence(Option<DealId>),
    Portfolio,
    Network,
    Inbox,
    Settings,
}

impl Route {
    /// Parses a navigation path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        if !trimmed.starts_with('/') {
            return None;
        }
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["pipeline"] => Some(Self::Pipeline),
            ["diligence"] => Some(Self::Diligence(None)),
            ["diligence", id] => Some(Self::Diligence(Some((*id).to_string()))),
            ["portfolio"] => Some(Self::Portfolio),
            ["network"] => Some(Self::Network),
            ["inbox"] => Some(Self::Inbox),
            ["settings"] => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Pipeline => "/pipeline".to_string(),
            Self::Diligence(None) => "/diligence".to_string(),
            Self::Diligence(Some(id)) => format!("/diligence/{id}"),
            Self::Portfolio => "/portfolio".to_string(),
            Self::Network => "/network".to_string(),
            Self::Inbox => "/inbox".to_string(),
            Self::Settings => "/settings".to_string(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/pipeline/"), Some(Route::Pipeline));
        assert_eq!(Route::parse("/diligence"), Some(Route::Diligence(None)));
        assert_eq!(
            Route::parse("/diligence/3"),
            Some(Route::Diligence(Some("3".to_string())))
        );
        assert_eq!(Route::parse("/settings"), Some(Route::Settings));
    }

    #[test]
    fn rejects_unknown_or_relative_paths() {
        assert_eq!(Route::parse("pipeline"), None);
        assert_eq!(Route::parse("/reports"), None);
        assert_eq!(Route::parse("/diligence/1/extra"), None);
    }

    #[test]
    fn path_round_trips_for_deal_route() {
        let route = Route::Diligence(Some("7".to_string()));
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
