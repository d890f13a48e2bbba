//! Team reference catalog for the mock feed.

use std::collections::BTreeMap;

use crate::models::{Sport, Team};

fn team(id: &str, city: &str, name: &str, abbr: &str, primary: &str, secondary: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        abbreviation: abbr.to_string(),
        city: city.to_string(),
        primary_color: primary.to_string(),
        secondary_color: secondary.to_string(),
    }
}

/// Constructor-injected team pool, keyed by sport.
#[derive(Debug, Clone, Default)]
pub struct TeamCatalog {
    teams: BTreeMap<&'static str, Vec<Team>>,
}

impl TeamCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: eight teams per sport.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.set_teams(
            Sport::Nfl,
            vec![
                team("nfl-packers", "Green Bay", "Packers", "GB", "#203731", "#FFB612"),
                team("nfl-bears", "Chicago", "Bears", "CHI", "#0B162A", "#C83803"),
                team("nfl-cowboys", "Dallas", "Cowboys", "DAL", "#041E42", "#869397"),
                team("nfl-eagles", "Philadelphia", "Eagles", "PHI", "#004C54", "#A5ACAF"),
                team("nfl-chiefs", "Kansas City", "Chiefs", "KC", "#E31837", "#FFB81C"),
                team("nfl-bills", "Buffalo", "Bills", "BUF", "#00338D", "#C60C30"),
                team("nfl-49ers", "San Francisco", "49ers", "SF", "#AA0000", "#B3995D"),
                team("nfl-dolphins", "Miami", "Dolphins", "MIA", "#008E97", "#FC4C02"),
            ],
        );
        catalog.set_teams(
            Sport::Nba,
            vec![
                team("nba-lakers", "Los Angeles", "Lakers", "LAL", "#552583", "#FDB927"),
                team("nba-celtics", "Boston", "Celtics", "BOS", "#007A33", "#BA9653"),
                team("nba-warriors", "Golden State", "Warriors", "GSW", "#1D428A", "#FFC72C"),
                team("nba-bulls", "Chicago", "Bulls", "CHI", "#CE1141", "#000000"),
                team("nba-heat", "Miami", "Heat", "MIA", "#98002E", "#F9A01B"),
                team("nba-knicks", "New York", "Knicks", "NYK", "#006BB6", "#F58426"),
                team("nba-suns", "Phoenix", "Suns", "PHX", "#1D1160", "#E56020"),
                team("nba-nuggets", "Denver", "Nuggets", "DEN", "#0E2240", "#FEC524"),
            ],
        );
        catalog.set_teams(
            Sport::Mlb,
            vec![
                team("mlb-yankees", "New York", "Yankees", "NYY", "#0C2340", "#C4CED3"),
                team("mlb-red-sox", "Boston", "Red Sox", "BOS", "#BD3039", "#0C2340"),
                team("mlb-dodgers", "Los Angeles", "Dodgers", "LAD", "#005A9C", "#A5ACAF"),
                team("mlb-cubs", "Chicago", "Cubs", "CHC", "#0E3386", "#CC3433"),
                team("mlb-braves", "Atlanta", "Braves", "ATL", "#CE1141", "#13274F"),
                team("mlb-astros", "Houston", "Astros", "HOU", "#002D62", "#EB6E1F"),
                team("mlb-mets", "New York", "Mets", "NYM", "#002D72", "#FF5910"),
                team("mlb-giants", "San Francisco", "Giants", "SF", "#FD5A1E", "#27251F"),
            ],
        );
        catalog.set_teams(
            Sport::Nhl,
            vec![
                team("nhl-bruins", "Boston", "Bruins", "BOS", "#FFB81C", "#000000"),
                team("nhl-rangers", "New York", "Rangers", "NYR", "#0038A8", "#CE1126"),
                team("nhl-blackhawks", "Chicago", "Blackhawks", "CHI", "#CF0A2C", "#FF671B"),
                team("nhl-red-wings", "Detroit", "Red Wings", "DET", "#CE1126", "#FFFFFF"),
                team("nhl-penguins", "Pittsburgh", "Penguins", "PIT", "#000000", "#FCB514"),
                team("nhl-maple-leafs", "Toronto", "Maple Leafs", "TOR", "#00205B", "#FFFFFF"),
                team("nhl-avalanche", "Colorado", "Avalanche", "COL", "#6F263D", "#236192"),
                team("nhl-kings", "Los Angeles", "Kings", "LAK", "#111111", "#A2AAAD"),
            ],
        );
        catalog
    }

    /// Replace the team pool for a sport.
    pub fn set_teams(&mut self, sport: Sport, teams: Vec<Team>) {
        self.teams.insert(sport.as_str(), teams);
    }

    pub fn teams(&self, sport: Sport) -> &[Team] {
        self.teams
            .get(sport.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
