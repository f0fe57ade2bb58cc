//! End-to-end: artifacts on disk to a formatted result table.

use catalog::Population;
use pipeline::{FilterSpec, FootFilter, PositionComparison};
use recommender::{
    Dataset, RecommendationOrchestrator, RecommendationRequest, RecommenderConfig,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const OUTFIELD_CSV: &str = "\
Player,Pos,Squad,Comp,Age,Foot
Cristiano Ronaldo,FW,Manchester Utd,Premier League,36,right
Lionel Messi,FW,Paris S-G,Ligue 1,34,left
Kylian Mbappé,FW,Paris S-G,Ligue 1,22,right
Nicolò Barella,MF,Inter,Serie A,24,right
Danilo,DF,Juventus,Serie A,30,right
Danilo,MF,Palmeiras,Série A,21,left
";

const OUTFIELD_INDEX: &str = r#"{
    "Cristiano Ronaldo": 0,
    "Lionel Messi": 1,
    "Kylian Mbappé": 2,
    "Nicolò Barella": 3,
    "Danilo (Juventus)": 4,
    "Danilo (Palmeiras)": 5
}"#;

const OUTFIELD_ENGINE: &str = r#"{
    "Cristiano Ronaldo": [1.0, 0.93, 0.88, 0.41, 0.12, 0.25],
    "Lionel Messi": [0.93, 1.0, 0.86, 0.52, 0.10, 0.30],
    "Kylian Mbappé": [0.88, 0.86, 1.0, 0.33, 0.08, 0.21],
    "Nicolò Barella": [0.41, 0.52, 0.33, 1.0, 0.44, 0.61],
    "Danilo (Juventus)": [0.12, 0.10, 0.08, 0.44, 1.0, 0.57],
    "Danilo (Palmeiras)": [0.25, 0.30, 0.21, 0.61, 0.57, 1.0]
}"#;

const GOALKEEPER_CSV: &str = "\
Player,Pos,Squad,Comp,Age
Alisson,GK,Liverpool,Premier League,28
Jan Oblak,GK,Atlético Madrid,La Liga,28
Gianluigi Donnarumma,GK,Paris S-G,Ligue 1,22
";

const GOALKEEPER_INDEX: &str =
    r#"{"Alisson": 0, "Jan Oblak": 1, "Gianluigi Donnarumma": 2}"#;

const GOALKEEPER_ENGINE: &str = r#"{
    "Alisson": [1.0, 0.875, 0.6],
    "Jan Oblak": [0.875, 1.0, 0.7],
    "Gianluigi Donnarumma": [0.6, 0.7, 1.0]
}"#;

fn write_artifacts(dir: &Path) {
    let files = [
        ("outfield.csv", OUTFIELD_CSV),
        ("outfield_id.json", OUTFIELD_INDEX),
        ("engine_outfield.json", OUTFIELD_ENGINE),
        ("goalkeeper.csv", GOALKEEPER_CSV),
        ("goalkeeper_id.json", GOALKEEPER_INDEX),
        ("engine_goalkeeper.json", GOALKEEPER_ENGINE),
    ];
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn create_test_orchestrator(config: RecommenderConfig) -> (TempDir, RecommendationOrchestrator) {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let dataset = Dataset::load(dir.path()).unwrap();
    (dir, RecommendationOrchestrator::new(Arc::new(dataset), config))
}

#[test]
fn test_default_player_and_recommendations() {
    let (_dir, orchestrator) = create_test_orchestrator(RecommenderConfig::default());

    let query = orchestrator
        .default_player(Population::Outfield)
        .unwrap()
        .to_string();
    assert_eq!(query, "Cristiano Ronaldo");

    let request = RecommendationRequest::new(
        Population::Outfield,
        query,
        FilterSpec::new().with_result_count(3),
    );
    let table = orchestrator.get_recommendations(&request).unwrap();

    let players: Vec<&str> = table.rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(players, vec!["Lionel Messi", "Kylian Mbappé", "Nicolò Barella"]);
    assert_eq!(table.rows[0].similarity, "93%");
    assert_eq!(table.rows[0].club, "Paris S-G");
    assert_eq!(table.rows[0].foot.as_deref(), Some("left"));
}

#[test]
fn test_interactive_defaults() {
    let (_dir, orchestrator) = create_test_orchestrator(RecommenderConfig::default());

    // Five results, ages 20 to 32, everything else open
    let request = RecommendationRequest::new(
        Population::Outfield,
        "Nicolò Barella",
        FilterSpec::new().with_age_range((20, 32)).with_result_count(5),
    );
    let table = orchestrator.get_recommendations(&request).unwrap();

    let players: Vec<&str> = table.rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(
        players,
        vec!["Danilo (Palmeiras)", "Danilo (Juventus)", "Kylian Mbappé"]
    );
}

#[test]
fn test_same_position_and_foot() {
    let (_dir, orchestrator) = create_test_orchestrator(RecommenderConfig::default());

    let request = RecommendationRequest::new(
        Population::Outfield,
        "Kylian Mbappé",
        FilterSpec::new()
            .with_position_comparison(PositionComparison::SamePosition)
            .with_preferred_foot(FootFilter::Automatic),
    );
    let table = orchestrator.get_recommendations(&request).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].player, "Cristiano Ronaldo");
    assert_eq!(table.rows[0].rank, 1);
}

#[test]
fn test_goalkeepers_with_precision() {
    let (_dir, orchestrator) =
        create_test_orchestrator(RecommenderConfig::default().with_precision(1));

    let request = RecommendationRequest::new(
        Population::Goalkeeper,
        "Alisson",
        FilterSpec::new().with_league("La Liga"),
    );
    let table = orchestrator.get_recommendations(&request).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].player, "Jan Oblak");
    assert_eq!(table.rows[0].similarity, "87.5%");
    assert_eq!(table.rows[0].foot, None);
}

#[test]
fn test_misaligned_engine_fails_to_load() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    fs::write(
        dir.path().join("engine_goalkeeper.json"),
        r#"{"Alisson": [1.0, 0.5], "Jan Oblak": [0.5, 1.0]}"#,
    )
    .unwrap();

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("goalkeeper"));
}

#[test]
fn test_shared_dataset_loads_once() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());

    let first = Dataset::shared(dir.path()).unwrap();
    // Later calls return the cached dataset whatever the path
    let second = Dataset::shared(Path::new("/nonexistent")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.catalog(Population::Goalkeeper).len(), 3);
}
