//! Parsers for the catalog artifacts.
//!
//! - player table: CSV with a header row; `Player, Squad, Pos, Comp, Age`
//!   and, for outfield players, `Foot`. Other columns are ignored.
//! - name index: JSON object mapping each unique display key to its row.

use crate::error::{DataLoadError, Result};
use crate::types::{Age, PreferredFoot, RowIndex};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// A table row before the name index has assigned its display key
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub name: String,
    pub club: String,
    pub position: String,
    pub league: String,
    pub age: Age,
    pub foot: Option<PreferredFoot>,
}

/// Columns we project out of the table by name. The artifact carries many
/// more statistical columns; serde skips them.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    #[serde(rename = "Player")]
    name: String,
    #[serde(rename = "Squad", default)]
    club: String,
    #[serde(rename = "Pos")]
    position: String,
    #[serde(rename = "Comp")]
    league: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Foot", default)]
    foot: Option<String>,
}

/// Short label for error messages
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open an artifact, reporting a missing file as `FileNotFound`
pub fn open_artifact(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Parse the player table, keeping file order
pub fn parse_players(path: &Path) -> Result<Vec<PlayerRow>> {
    let file = file_label(path);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(open_artifact(path)?));

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Csv {
            file: file.clone(),
            source,
        })?
        .clone();

    let mut players = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| DataLoadError::Csv {
            file: file.clone(),
            source,
        })?;
        // Header is line 1
        let line_no = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);

        let raw: RawPlayerRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| DataLoadError::ParseError {
                    file: file.clone(),
                    line: line_no,
                    reason: e.to_string(),
                })?;

        let age = parse_age(&raw.age).map_err(|reason| DataLoadError::ParseError {
            file: file.clone(),
            line: line_no,
            reason,
        })?;

        players.push(PlayerRow {
            name: raw.name,
            club: raw.club,
            position: raw.position,
            league: raw.league,
            age,
            foot: parse_foot(raw.foot.as_deref())?,
        });
    }

    Ok(players)
}

/// Parse the name index
pub fn parse_name_index(path: &Path) -> Result<HashMap<String, RowIndex>> {
    let reader = BufReader::new(open_artifact(path)?);
    serde_json::from_reader(reader).map_err(|source| DataLoadError::Json {
        file: file_label(path),
        source,
    })
}

/// Parse an age cell.
///
/// Accepts plain integers ("24"), floats written by dataframe exports
/// ("24.0") and the years-days form ("24-118"). Fractions are truncated.
fn parse_age(s: &str) -> std::result::Result<Age, String> {
    let years = s.split('-').next().unwrap_or_default().trim();
    let value: f64 = years
        .parse()
        .map_err(|e| format!("Invalid age '{}': {}", s, e))?;

    if !value.is_finite() || value < 0.0 || value > Age::MAX as f64 {
        return Err(format!("Age out of range: '{}'", s));
    }
    Ok(value as Age)
}

/// Parse a foot cell. Blank cells mean "not recorded".
fn parse_foot(s: Option<&str>) -> Result<Option<PreferredFoot>> {
    let Some(s) = s.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match s.to_ascii_lowercase().as_str() {
        "left" => Ok(Some(PreferredFoot::Left)),
        "right" => Ok(Some(PreferredFoot::Right)),
        _ => Err(DataLoadError::InvalidValue {
            field: "foot".to_string(),
            value: s.to_string(),
        }),
    }
}
