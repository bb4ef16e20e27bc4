//! Roster CSV export and import.
//!
//! Export writes `number,name,preferredPosition,leadership,stick,canPlay,notes`
//! with the can-play roles joined inside one field. Import is forgiving: the
//! header row is optional, aliases are normalized, and invalid rows are
//! skipped with a message rather than failing the whole file.

use crate::models::{Leadership, PlayerDraft, Position, RoleCode, Stick, Team};
use serde::Serialize;

/// The whole file was unreadable as CSV (quoting errors and the like).
/// Per-row problems never produce this; they land in the import report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CsvFileError;

impl std::fmt::Display for CsvFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid CSV file")
    }
}

/// Outcome of an import: how many rows became players, how many were
/// skipped, and why.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub messages: Vec<String>,
}

const EXPORT_HEADER: [&str; 7] = [
    "number",
    "name",
    "preferredPosition",
    "leadership",
    "stick",
    "canPlay",
    "notes",
];

/// Maximum player-name length accepted on import.
const NAME_MAX: usize = 16;

/// Serialize a team's roster to CSV text.
pub fn export_roster_csv(team: &Team) -> Result<String, CsvFileError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER).map_err(|_| CsvFileError)?;
    for p in &team.players {
        let can_play: Vec<&str> = p.can_play.iter().map(|r| r.as_str()).collect();
        let stick = match p.stick {
            Some(Stick::Left) => "Left",
            Some(Stick::Right) => "Right",
            None => "",
        };
        writer
            .write_record([
                p.number.to_string().as_str(),
                p.name.as_str(),
                p.preferred_position.as_str(),
                p.leadership.letter(),
                stick,
                can_play.join(",").as_str(),
                p.notes.as_str(),
            ])
            .map_err(|_| CsvFileError)?;
    }
    let bytes = writer.into_inner().map_err(|_| CsvFileError)?;
    String::from_utf8(bytes).map_err(|_| CsvFileError)
}

/// Build a new team named `team_name` from CSV text.
///
/// A header row is detected case-insensitively (any cell named `number` or
/// `name`); without one, columns are taken in export order. Rows that fail
/// validation are skipped and reported. The first Captain and first two
/// Alternates in the file claim those letters; later claims are stripped.
pub fn import_roster_csv(
    team_name: &str,
    text: &str,
) -> Result<(Team, ImportReport), CsvFileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|_| CsvFileError)?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    while rows
        .last()
        .is_some_and(|row| row.iter().all(|c| c.trim().is_empty()))
    {
        rows.pop();
    }

    let header: Vec<String> = rows
        .first()
        .map(|row| row.iter().map(|c| c.trim().to_lowercase()).collect())
        .unwrap_or_default();
    let has_header = header.iter().any(|h| h == "number" || h == "name");
    let start = usize::from(has_header);

    let column = |row: &[String], key: &str, fallback: usize| -> String {
        let idx = if has_header {
            match header.iter().position(|h| h == key) {
                Some(i) => i,
                None => return String::new(),
            }
        } else {
            fallback
        };
        row.get(idx).cloned().unwrap_or_default()
    };

    let mut team = Team::new(team_name);
    let mut report = ImportReport::default();
    let mut captain_used = false;
    let mut alternate_count = 0;

    for (i, row) in rows.iter().enumerate().skip(start) {
        let row_no = i + 1;
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let raw_number = column(row, "number", 0);
        let raw_number = raw_number.trim();
        let number = match parse_number(raw_number) {
            Some(n) => n,
            None => {
                report.skipped += 1;
                report.messages.push(format!(
                    "Row {}: invalid number \"{}\" (must be 1-2 digits)",
                    row_no, raw_number
                ));
                continue;
            }
        };
        if team.players.iter().any(|p| p.number == number) {
            report.skipped += 1;
            report
                .messages
                .push(format!("Row {}: number {} duplicated in import", row_no, number));
            continue;
        }

        let name = column(row, "name", 1).trim().to_string();
        if name.is_empty() {
            report.skipped += 1;
            report.messages.push(format!("Row {}: missing name", row_no));
            continue;
        }
        let name: String = name.chars().take(NAME_MAX).collect();

        let mut leadership = normalize_leadership(&column(row, "leadership", 3));
        match leadership {
            Leadership::Captain if captain_used => leadership = Leadership::None,
            Leadership::Captain => captain_used = true,
            Leadership::Alternate if alternate_count >= 2 => leadership = Leadership::None,
            Leadership::Alternate => alternate_count += 1,
            Leadership::None => {}
        }

        let draft = PlayerDraft {
            number,
            name,
            preferred_position: normalize_position(&column(row, "preferredposition", 2)),
            leadership,
            stick: normalize_stick(&column(row, "stick", 4)),
            can_play: parse_can_play(&column(row, "canplay", 5)),
            notes: column(row, "notes", 6),
        };
        match team.add_player(draft) {
            Ok(_) => report.imported += 1,
            Err(e) => {
                report.skipped += 1;
                report.messages.push(format!("Row {}: {}", row_no, e));
            }
        }
    }

    Ok((team, report))
}

/// Jersey numbers on import: 1-2 digits, positive.
fn parse_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n: u32 = raw.parse().ok()?;
    (n > 0).then_some(n)
}

/// Map a position cell to a `Position`, accepting full names and common
/// short codes. Anything unrecognized (or empty) defaults to Wing.
pub fn normalize_position(raw: &str) -> Position {
    let v = raw.trim();
    let lower = v.to_lowercase();
    let upper = v.to_uppercase();
    if upper == "C" || upper == "CE" || upper == "CTR" || lower == "centre" || lower == "center" {
        Position::Centre
    } else if upper == "W" || upper == "LW" || upper == "RW" || lower == "wing" {
        Position::Wing
    } else if upper == "D"
        || upper == "LD"
        || upper == "RD"
        || lower == "defender"
        || lower == "defence"
        || lower == "defense"
    {
        Position::Defender
    } else if upper == "G" || upper == "GK" || lower == "goalie" || lower == "goalkeeper" {
        Position::Goalie
    } else {
        // Anything unrecognized (including empty) imports as a winger.
        Position::Wing
    }
}

/// `C` / `A` (any case) or nothing.
pub fn normalize_leadership(raw: &str) -> Leadership {
    match raw.trim().to_uppercase().as_str() {
        "C" => Leadership::Captain,
        "A" => Leadership::Alternate,
        _ => Leadership::None,
    }
}

/// `Left` / `Right`, also accepting `L`/`LH`/`R`/`RH`.
pub fn normalize_stick(raw: &str) -> Option<Stick> {
    match raw.trim().to_uppercase().as_str() {
        "LEFT" | "L" | "LH" => Some(Stick::Left),
        "RIGHT" | "R" | "RH" => Some(Stick::Right),
        _ => None,
    }
}

/// Split a can-play cell on commas, semicolons, or whitespace; keep only
/// known role codes; de-dupe preserving order.
pub fn parse_can_play(raw: &str) -> Vec<RoleCode> {
    let mut out = Vec::new();
    for token in raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
        let token = token.trim().to_uppercase();
        if token.is_empty() {
            continue;
        }
        if let Some(role) = RoleCode::parse(&token) {
            if !out.contains(&role) {
                out.push(role);
            }
        }
    }
    out
}
