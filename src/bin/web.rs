//! Single binary web server: lineup builder API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (path
//! the whole application state is loaded from and saved to as JSON).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use hockey_lineup_web::logic::{
    add_defence_pair, add_forward_line, apply_move, auto_fill_lineup,
    backup_goalie_removal_displaced, defence_pair_removal_displaced, export_roster_csv,
    forward_line_removal_displaced, import_roster_csv, lineup_sheet, remove_defence_pair,
    remove_forward_line, toggle_backup_goalie, MoveEvent, MoveTarget,
};
use hockey_lineup_web::models::{AppData, LineupId, PlayerDraft, PlayerId, Team, TeamId};
use hockey_lineup_web::storage;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use uuid::Uuid;

/// Shared state: the whole application blob plus where it is persisted.
struct StateEntry {
    data: AppData,
    path: PathBuf,
}

type AppState = Data<RwLock<StateEntry>>;

/// Save state to disk after a mutation. Failures are logged, not fatal; the
/// in-memory state stays authoritative.
fn persist(entry: &mut StateEntry) {
    entry.data.touch();
    if let Err(e) = storage::save(&entry.path, &entry.data) {
        log::warn!("Failed to save data file {}: {}", entry.path.display(), e);
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct ImportBody {
    #[serde(default)]
    team_name: Option<String>,
    csv: String,
}

#[derive(Deserialize)]
struct SetActiveLineupBody {
    lineup_id: LineupId,
}

/// Destructive structure changes carry the caller's confirmation; without it
/// a change that would displace players is refused with the displaced count.
#[derive(Deserialize, Default)]
struct ConfirmBody {
    #[serde(default)]
    confirm: bool,
}

#[derive(Deserialize)]
struct MoveBody {
    player_id: PlayerId,
    /// Slot id, or the `AVAILABLE` drop-zone sentinel.
    target: String,
}

#[derive(Deserialize)]
struct DownloadQuery {
    #[serde(default)]
    download: bool,
}

/// Path segment: team id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct TeamPath {
    id: TeamId,
}

/// Path segments: team id and player id (e.g. /api/teams/{id}/players/{player_id})
#[derive(Deserialize)]
struct TeamPlayerPath {
    id: TeamId,
    player_id: Uuid,
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": format!("No {}", what) }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "hockey-lineup-web",
    })
}

/// Whole application state (teams, rosters, lineup collections).
#[get("/api/state")]
async fn api_get_state(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(&g.data)
}

/// Create a team (becomes active).
#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<NameBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = g.data.add_team(Team::new(name));
    persist(&mut g);
    match g.data.team(id) {
        Some(team) => HttpResponse::Ok().json(team),
        None => not_found("team"),
    }
}

/// Rename a team.
#[put("/api/teams/{id}")]
async fn api_rename_team(state: AppState, path: Path<TeamPath>, body: Json<NameBody>) -> HttpResponse {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(team) = g.data.team_mut(path.id) else {
        return not_found("team");
    };
    team.name = name;
    let team = team.clone();
    persist(&mut g);
    HttpResponse::Ok().json(team)
}

/// Delete a team with its roster and lineups.
#[delete("/api/teams/{id}")]
async fn api_delete_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.remove_team(path.id);
    persist(&mut g);
    HttpResponse::Ok().json(&g.data)
}

/// Make a team the active one. No-op on unknown ids.
#[post("/api/teams/{id}/activate")]
async fn api_activate_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.data.set_active_team(path.id);
    persist(&mut g);
    HttpResponse::Ok().json(&g.data)
}

/// Add a player to a team's roster.
#[post("/api/teams/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<PlayerDraft>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(team) = g.data.team_mut(path.id) else {
        return not_found("team");
    };
    match team.add_player(body.into_inner()) {
        Ok(_) => {
            let team = team.clone();
            persist(&mut g);
            HttpResponse::Ok().json(team)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a rostered player.
#[put("/api/teams/{id}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<TeamPlayerPath>,
    body: Json<PlayerDraft>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(team) = g.data.team_mut(path.id) else {
        return not_found("team");
    };
    match team.update_player(path.player_id, body.into_inner()) {
        Ok(()) => {
            let team = team.clone();
            persist(&mut g);
            HttpResponse::Ok().json(team)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player from the roster and from every lineup of the team.
#[delete("/api/teams/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TeamPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    match g.data.remove_player(path.id, path.player_id) {
        Ok(()) => {
            persist(&mut g);
            HttpResponse::Ok().json(&g.data)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Export a team's roster as CSV (optionally as a file download).
#[get("/api/teams/{id}/roster.csv")]
async fn api_export_roster(
    state: AppState,
    path: Path<TeamPath>,
    query: Query<DownloadQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(team) = g.data.team(path.id) else {
        return not_found("team");
    };
    match export_roster_csv(team) {
        Ok(csv) => {
            let mut response = HttpResponse::Ok();
            response.content_type("text/csv; charset=utf-8");
            if query.download {
                let safe: String = team
                    .name
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
                    .collect();
                response.insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}_roster.csv\"", safe),
                ));
            }
            response.body(csv)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Import a roster CSV as a new team (becomes active). Returns the team and
/// a row-by-row report; invalid rows are skipped, not fatal.
#[post("/api/teams/import")]
async fn api_import_roster(state: AppState, body: Json<ImportBody>) -> HttpResponse {
    let team_name = body
        .team_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Imported Team");
    let (team, report) = match import_roster_csv(team_name, &body.csv) {
        Ok(result) => result,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = g.data.add_team(team);
    persist(&mut g);
    match g.data.team(id) {
        Some(team) => HttpResponse::Ok().json(serde_json::json!({
            "team": team,
            "report": report,
        })),
        None => not_found("team"),
    }
}

/// A team's lineup collection (seeded with a default lineup on first access).
#[get("/api/teams/{id}/lineups")]
async fn api_get_lineups(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let collection = g.data.lineups_for(path.id).clone();
    HttpResponse::Ok().json(collection)
}

/// Create a lineup (default structure, becomes active).
#[post("/api/teams/{id}/lineups")]
async fn api_create_lineup(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.lineups_for(path.id).create(name);
    persist(&mut g);
    HttpResponse::Ok().json(g.data.lineups_for(path.id).clone())
}

/// Rename the active lineup.
#[put("/api/teams/{id}/lineups/name")]
async fn api_rename_lineup(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.lineups_for(path.id).rename_active(name);
    persist(&mut g);
    HttpResponse::Ok().json(g.data.lineups_for(path.id).clone())
}

/// Duplicate the active lineup (deep copy, inserted after it, becomes active).
#[post("/api/teams/{id}/lineups/duplicate")]
async fn api_duplicate_lineup(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.lineups_for(path.id).duplicate_active(name);
    persist(&mut g);
    HttpResponse::Ok().json(g.data.lineups_for(path.id).clone())
}

/// Delete the active lineup; the collection is never left empty.
#[delete("/api/teams/{id}/lineups/active")]
async fn api_delete_lineup(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.lineups_for(path.id).delete_active();
    persist(&mut g);
    HttpResponse::Ok().json(g.data.lineups_for(path.id).clone())
}

/// Switch the active lineup. No-op on ids outside the collection.
#[put("/api/teams/{id}/lineups/active")]
async fn api_set_active_lineup(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<SetActiveLineupBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    g.data.lineups_for(path.id).set_active(body.lineup_id);
    persist(&mut g);
    HttpResponse::Ok().json(g.data.lineups_for(path.id).clone())
}

/// Add a forward line to the active lineup (no-op at the max of 4).
#[post("/api/teams/{id}/lineups/forward-lines/add")]
async fn api_add_forward_line(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    add_forward_line(lineup);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Remove the highest forward line. Without `confirm`, a removal that would
/// displace players is refused with 409 and the displaced count.
#[post("/api/teams/{id}/lineups/forward-lines/remove")]
async fn api_remove_forward_line(
    state: AppState,
    path: Path<TeamPath>,
    body: Option<Json<ConfirmBody>>,
) -> HttpResponse {
    let confirm = body.map(|b| b.confirm).unwrap_or(false);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    let displaced = forward_line_removal_displaced(lineup);
    if displaced > 0 && !confirm {
        return HttpResponse::Conflict().json(serde_json::json!({ "displaced": displaced }));
    }
    remove_forward_line(lineup);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Add a defence pair to the active lineup (no-op at the max of 4).
#[post("/api/teams/{id}/lineups/defence-pairs/add")]
async fn api_add_defence_pair(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    add_defence_pair(lineup);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Remove the highest defence pair (409 + displaced count unless confirmed).
#[post("/api/teams/{id}/lineups/defence-pairs/remove")]
async fn api_remove_defence_pair(
    state: AppState,
    path: Path<TeamPath>,
    body: Option<Json<ConfirmBody>>,
) -> HttpResponse {
    let confirm = body.map(|b| b.confirm).unwrap_or(false);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    let displaced = defence_pair_removal_displaced(lineup);
    if displaced > 0 && !confirm {
        return HttpResponse::Conflict().json(serde_json::json!({ "displaced": displaced }));
    }
    remove_defence_pair(lineup);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Toggle the backup goalie slot. Disabling with an assigned backup is
/// refused with 409 unless confirmed.
#[post("/api/teams/{id}/lineups/backup-goalie/toggle")]
async fn api_toggle_backup_goalie(
    state: AppState,
    path: Path<TeamPath>,
    body: Option<Json<ConfirmBody>>,
) -> HttpResponse {
    let confirm = body.map(|b| b.confirm).unwrap_or(false);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    let displaced = backup_goalie_removal_displaced(lineup);
    if displaced > 0 && !confirm {
        return HttpResponse::Conflict().json(serde_json::json!({ "displaced": displaced }));
    }
    toggle_backup_goalie(lineup);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Auto-fill the active lineup's empty slots from the team's unassigned
/// players. Occupied slots are untouched.
#[post("/api/teams/{id}/lineups/auto-fill")]
async fn api_auto_fill(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let d = &mut g.data;
    let Some(team) = d.teams.iter().find(|t| t.id == path.id) else {
        return not_found("team");
    };
    let Some(collection) = d.lineups_by_team.get_mut(&path.id) else {
        return not_found("lineup");
    };
    let Some(lineup) = collection.active_lineup_mut() else {
        return not_found("lineup");
    };
    let assigned: HashSet<PlayerId> = lineup.assigned_player_ids().into_iter().collect();
    let pool: Vec<_> = team
        .players
        .iter()
        .filter(|p| !assigned.contains(&p.id))
        .cloned()
        .collect();
    let filled = auto_fill_lineup(lineup, pool);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(serde_json::json!({ "filled": filled, "lineup": lineup }))
}

/// Clear every assignment in the active lineup.
#[post("/api/teams/{id}/lineups/clear")]
async fn api_clear_assignments(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    lineup.clear_assignments();
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Apply one drag-end move to the active lineup. Stale targets and other
/// boundary cases are silent no-ops, so the response is always the lineup.
#[post("/api/teams/{id}/lineups/move")]
async fn api_apply_move(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<MoveBody>,
) -> HttpResponse {
    let event = MoveEvent {
        player_id: body.player_id,
        target: MoveTarget::from_drop_id(&body.target),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.data.team(path.id).is_none() {
        return not_found("team");
    }
    let Some(lineup) = g.data.lineups_for(path.id).active_lineup_mut() else {
        return not_found("lineup");
    };
    apply_move(lineup, &event);
    let lineup = lineup.clone();
    persist(&mut g);
    HttpResponse::Ok().json(lineup)
}

/// Printable sheet for the active lineup (read-only projection).
#[get("/api/teams/{id}/lineups/sheet")]
async fn api_lineup_sheet(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(team) = g.data.team(path.id) else {
        return not_found("team");
    };
    let Some(lineup) = g
        .data
        .lineups_by_team
        .get(&path.id)
        .and_then(|c| c.active_lineup())
    else {
        return not_found("lineup");
    };
    HttpResponse::Ok().json(lineup_sheet(team, lineup))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("lineup_data.json")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);

    let data = match storage::load(&data_file) {
        Some(data) => {
            log::info!(
                "Loaded {} team(s) from {}",
                data.teams.len(),
                data_file.display()
            );
            data
        }
        None => {
            log::info!("Starting with empty state (data file: {})", data_file.display());
            AppData::new()
        }
    };

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(StateEntry {
        data,
        path: data_file,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_state)
            .service(api_create_team)
            .service(api_rename_team)
            .service(api_delete_team)
            .service(api_activate_team)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_export_roster)
            .service(api_import_roster)
            .service(api_get_lineups)
            .service(api_create_lineup)
            .service(api_rename_lineup)
            .service(api_duplicate_lineup)
            .service(api_delete_lineup)
            .service(api_set_active_lineup)
            .service(api_add_forward_line)
            .service(api_remove_forward_line)
            .service(api_add_defence_pair)
            .service(api_remove_defence_pair)
            .service(api_toggle_backup_goalie)
            .service(api_auto_fill)
            .service(api_clear_assignments)
            .service(api_apply_move)
            .service(api_lineup_sheet)
    })
    .bind(bind)?
    .run()
    .await
}
