use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use hoopcast_engine::{
    DefensiveBenchmark, GameLog, OpponentProfile, Player, Position, PositionalRatings,
    StatCategory,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::synthetic::{self, LogGenerator};

/// An opposing team and what it allows defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub defense: OpponentProfile,
}

/// Players, teams, league benchmarks and game logs in one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub league_averages: DefensiveBenchmark,
    /// Game logs keyed by player id.
    #[serde(default)]
    pub game_logs: BTreeMap<String, Vec<GameLog>>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LookupError {
    #[display("player not found: {id}")]
    PlayerNotFound { id: String },
    #[display("team not found: {id}")]
    TeamNotFound { id: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("failed to access dataset file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to parse dataset file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Dataset {
    /// Reads a dataset from a JSON file.
    pub fn load<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?;
        let dataset: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Json {
                path: path.to_owned(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            players = dataset.players.len(),
            teams = dataset.teams.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Writes the dataset as pretty-printed JSON.
    pub fn save<P>(&self, path: P) -> Result<(), DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let io_err = |source| DatasetError::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| DatasetError::Json {
            path: path.to_owned(),
            source,
        })?;
        writeln!(writer).map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }

    pub fn player(&self, id: &str) -> Result<&Player, LookupError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| LookupError::PlayerNotFound { id: id.to_owned() })
    }

    /// Finds a team by id or abbreviation, ignoring case.
    pub fn team(&self, key: &str) -> Result<&Team, LookupError> {
        self.teams
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(key) || t.abbreviation.eq_ignore_ascii_case(key))
            .ok_or_else(|| LookupError::TeamNotFound { id: key.to_owned() })
    }

    /// Returns the player's game logs; a known player without logs has none.
    pub fn logs(&self, player_id: &str) -> Result<&[GameLog], LookupError> {
        self.player(player_id)?;
        Ok(self
            .game_logs
            .get(player_id)
            .map_or(&[][..], Vec::as_slice))
    }

    /// Builds a small demo league with generated logs.
    pub fn sample<R>(rng: &mut R, games: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        let league_averages = DefensiveBenchmark::default();
        let first_game = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap_or_default();

        let mut players = vec![];
        let mut game_logs = BTreeMap::new();
        for (id, name, position, team, base_minutes, rates) in SAMPLE_PLAYERS {
            let generator = LogGenerator {
                games,
                base_minutes,
                rates,
                first_game,
            };
            game_logs.insert(id.to_owned(), synthetic::generate_logs(rng, &generator));
            players.push(Player {
                id: id.to_owned(),
                name: name.to_owned(),
                position,
                team: team.to_owned(),
            });
        }

        let teams = SAMPLE_TEAMS
            .into_iter()
            .map(|(id, name, abbreviation, ratings, factors)| {
                let allowed = StatCategory::ALL.into_iter().map(|c| {
                    let value = league_averages.get(c) * factors[c.as_index()];
                    (c, (value * 10.0).round() / 10.0)
                });
                Team {
                    id: id.to_owned(),
                    name: name.to_owned(),
                    abbreviation: abbreviation.to_owned(),
                    defense: OpponentProfile::from_allowed(allowed).with_positional(ratings),
                }
            })
            .collect();

        Self {
            players,
            teams,
            league_averages,
            game_logs,
        }
    }
}

type SamplePlayer = (
    &'static str,
    &'static str,
    Position,
    &'static str,
    f64,
    [f64; StatCategory::LEN],
);

const SAMPLE_PLAYERS: [SamplePlayer; 5] = [
    (
        "1",
        "Luka Doncic",
        Position::PointGuard,
        "DAL",
        36.0,
        [0.92, 0.24, 0.25, 0.04, 0.015, 0.11, 0.1],
    ),
    (
        "2",
        "LeBron James",
        Position::SmallForward,
        "LAL",
        34.0,
        [0.74, 0.22, 0.23, 0.035, 0.02, 0.1, 0.06],
    ),
    (
        "3",
        "Nikola Jokic",
        Position::Center,
        "DEN",
        34.0,
        [0.78, 0.37, 0.27, 0.04, 0.02, 0.09, 0.03],
    ),
    (
        "4",
        "Stephen Curry",
        Position::PointGuard,
        "GSW",
        33.0,
        [0.82, 0.14, 0.16, 0.03, 0.01, 0.09, 0.15],
    ),
    (
        "5",
        "Jayson Tatum",
        Position::PowerForward,
        "BOS",
        35.0,
        [0.76, 0.24, 0.14, 0.03, 0.018, 0.07, 0.09],
    ),
];

type SampleTeam = (
    &'static str,
    &'static str,
    &'static str,
    PositionalRatings,
    [f64; StatCategory::LEN],
);

const fn ratings(
    overall: f64,
    vs_pg: f64,
    vs_sg: f64,
    vs_sf: f64,
    vs_pf: f64,
    vs_c: f64,
) -> PositionalRatings {
    PositionalRatings {
        overall,
        vs_pg: Some(vs_pg),
        vs_sg: Some(vs_sg),
        vs_sf: Some(vs_sf),
        vs_pf: Some(vs_pf),
        vs_c: Some(vs_c),
    }
}

const SAMPLE_TEAMS: [SampleTeam; 4] = [
    (
        "bos",
        "Boston Celtics",
        "BOS",
        ratings(0.95, 0.92, 0.94, 0.96, 0.98, 0.99),
        [0.95, 0.97, 0.94, 0.92, 0.9, 1.08, 0.93],
    ),
    (
        "was",
        "Washington Wizards",
        "WAS",
        ratings(1.15, 1.12, 1.14, 1.18, 1.16, 1.15),
        [1.06, 1.08, 1.1, 1.04, 1.12, 0.9, 1.09],
    ),
    (
        "min",
        "Minnesota Timberwolves",
        "MIN",
        ratings(0.92, 0.95, 0.93, 0.9, 0.92, 0.88),
        [0.93, 0.95, 0.96, 1.0, 0.85, 1.05, 0.94],
    ),
    (
        "sas",
        "San Antonio Spurs",
        "SAS",
        ratings(1.1, 1.08, 1.12, 1.1, 1.09, 1.11),
        [1.04, 1.02, 1.05, 0.98, 1.03, 0.96, 1.07],
    ),
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn sample() -> Dataset {
        Dataset::sample(&mut Pcg64Mcg::seed_from_u64(21), 25)
    }

    #[test]
    fn test_sample_has_players_teams_and_logs() {
        let dataset = sample();
        assert_eq!(dataset.players.len(), 5);
        assert_eq!(dataset.teams.len(), 4);
        for player in &dataset.players {
            assert_eq!(dataset.logs(&player.id).unwrap().len(), 25);
        }
        let bos = dataset.team("bos").unwrap();
        assert_eq!(bos.defense.allowed(StatCategory::Rebounds), Some(42.7));
        assert!(bos.defense.positional.is_some());
    }

    #[test]
    fn test_team_lookup_by_abbreviation_ignores_case() {
        let dataset = sample();
        assert_eq!(dataset.team("was").unwrap().abbreviation, "WAS");
        assert_eq!(dataset.team("Was").unwrap().id, "was");
    }

    #[test]
    fn test_unknown_ids_are_lookup_errors() {
        let dataset = sample();
        assert_eq!(
            dataset.player("99").unwrap_err(),
            LookupError::PlayerNotFound { id: "99".to_owned() }
        );
        assert_eq!(
            dataset.team("lal").unwrap_err(),
            LookupError::TeamNotFound {
                id: "lal".to_owned()
            }
        );
        assert!(dataset.logs("99").is_err());
    }

    #[test]
    fn test_player_without_logs_has_empty_slice() {
        let mut dataset = sample();
        dataset.game_logs.remove("3");
        assert!(dataset.logs("3").unwrap().is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let dataset = sample();
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_minimal_json_uses_default_benchmark() {
        let json = r#"{
            "players": [{"id": "1", "name": "A", "position": "SG", "team": "NYK"}],
            "teams": [{"id": "nyk", "name": "Knicks", "abbreviation": "NYK",
                       "defense": {"allowed": {"PTS": 111.0}}}]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.league_averages, DefensiveBenchmark::default());
        assert!(dataset.logs("1").unwrap().is_empty());
        assert_eq!(dataset.team("nyk").unwrap().defense.positional, None);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Dataset::load("/nonexistent/hoopcast/dataset.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("dataset.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dataset = sample();
        let path =
            std::env::temp_dir().join(format!("hoopcast-dataset-{}.json", std::process::id()));
        dataset.save(&path).unwrap();
        let loaded = Dataset::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, dataset);
    }
}
