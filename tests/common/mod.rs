//! Shared fixtures for integration tests.
#![allow(dead_code)]

use league_data::entities::{conference, division, league, player, team};
use league_data::storage::Database;
use league_data::{
    ConferenceRepository, DivisionRepository, LeagueRepository, PlayerRepository, TeamRepository,
};
use sea_orm::ActiveValue::{NotSet, Set};

/// Repositories over one shared in-memory database.
pub struct Repos {
    pub db: Database,
    pub leagues: LeagueRepository,
    pub conferences: ConferenceRepository,
    pub divisions: DivisionRepository,
    pub teams: TeamRepository,
    pub players: PlayerRepository,
}

pub async fn repos() -> Repos {
    let db = Database::connect_in_memory()
        .await
        .expect("in-memory database");
    let conn = db.conn();
    Repos {
        leagues: LeagueRepository::new(conn.clone()),
        conferences: ConferenceRepository::new(conn.clone()),
        divisions: DivisionRepository::new(conn.clone()),
        teams: TeamRepository::new(conn.clone()),
        players: PlayerRepository::new(conn),
        db,
    }
}

pub fn new_league(name: &str, abbreviation: &str) -> league::ActiveModel {
    league::ActiveModel {
        id: NotSet,
        external_id: Set(None),
        name: Set(name.to_string()),
        abbreviation: Set(abbreviation.to_string()),
    }
}

pub fn new_conference(league_id: i32, name: &str, abbreviation: &str) -> conference::ActiveModel {
    conference::ActiveModel {
        id: NotSet,
        league_id: Set(league_id),
        name: Set(name.to_string()),
        abbreviation: Set(abbreviation.to_string()),
    }
}

pub fn new_division(conference_id: i32, name: &str, abbreviation: &str) -> division::ActiveModel {
    division::ActiveModel {
        id: NotSet,
        conference_id: Set(conference_id),
        name: Set(name.to_string()),
        abbreviation: Set(abbreviation.to_string()),
    }
}

pub fn new_team(division_id: i32, name: &str) -> team::ActiveModel {
    team::ActiveModel {
        id: NotSet,
        division_id: Set(division_id),
        code: Set(None),
        location: Set(None),
        name: Set(name.to_string()),
        abbreviation: Set(None),
        win: Set(0),
        loss: Set(0),
        tie: Set(0),
        points_for: Set(0),
        points_against: Set(0),
        stadium: Set(None),
        capacity: Set(None),
        address: Set(None),
        city: Set(None),
        state: Set(None),
        zip: Set(None),
        latitude: Set(None),
        longitude: Set(None),
        is_deleted: Set(false),
        deleted_at: Set(None),
        deleted_reason: Set(None),
        deleted_by: Set(None),
    }
}

pub fn new_player(team_id: Option<i32>, name: &str, position: &str) -> player::ActiveModel {
    player::ActiveModel {
        id: NotSet,
        team_id: Set(team_id),
        number: Set(0),
        position: Set(Some(position.to_string())),
        name: Set(name.to_string()),
        height: Set(None),
        weight: Set(None),
        age: Set(None),
        birth_date: Set(None),
        experience: Set(None),
        draft_year: Set(None),
        draft_round: Set(None),
        draft_pick: Set(None),
        college: Set(None),
        state: Set(None),
        rank: Set(None),
        rating: Set(None),
        depth: Set(None),
        is_deleted: Set(false),
        deleted_at: Set(None),
        deleted_reason: Set(None),
        deleted_by: Set(None),
    }
}

/// One League → Conference → Division → Team → Player chain, created
/// through the write path.
pub struct Hierarchy {
    pub league: league::Model,
    pub conference: conference::Model,
    pub division: division::Model,
    pub team: team::Model,
    pub player: player::Model,
}

pub async fn seed_nfl(r: &Repos) -> Hierarchy {
    let league = r.leagues.add(new_league("NFL", "NFL")).await.expect("league");
    let conference = r
        .conferences
        .add(new_conference(league.id, "AFC", "AFC"))
        .await
        .expect("conference");
    let division = r
        .divisions
        .add(new_division(conference.id, "East", "E"))
        .await
        .expect("division");
    let team = r
        .teams
        .add(new_team(division.id, "Bills"))
        .await
        .expect("team");
    let player = r
        .players
        .add(new_player(Some(team.id), "J. Doe", "QB"))
        .await
        .expect("player");

    Hierarchy {
        league,
        conference,
        division,
        team,
        player,
    }
}

/// A league with two conferences, two divisions each, two teams each and
/// two players per team, next to a second single-chain league and one
/// unassigned free agent.
pub struct Fanout {
    pub league: league::Model,
    pub other_league: league::Model,
    pub conferences: Vec<conference::Model>,
    pub divisions: Vec<division::Model>,
    pub teams: Vec<team::Model>,
    pub players: Vec<player::Model>,
    pub other_player: player::Model,
}

pub async fn seed_fanout(r: &Repos) -> Fanout {
    let league = r.leagues.add(new_league("NFL", "NFL")).await.expect("league");

    let mut conferences = Vec::new();
    let mut divisions = Vec::new();
    let mut teams = Vec::new();
    let mut players = Vec::new();

    for c in 0..2 {
        let conference = r
            .conferences
            .add(new_conference(league.id, &format!("Conf {c}"), &format!("C{c}")))
            .await
            .expect("conference");
        for d in 0..2 {
            let division = r
                .divisions
                .add(new_division(conference.id, &format!("Div {c}{d}"), &format!("D{c}")))
                .await
                .expect("division");
            for t in 0..2 {
                let team = r
                    .teams
                    .add(new_team(division.id, &format!("Team {c}{d}{t}")))
                    .await
                    .expect("team");
                for p in 0..2 {
                    players.push(
                        r.players
                            .add(new_player(Some(team.id), &format!("Player {c}{d}{t}{p}"), "RB"))
                            .await
                            .expect("player"),
                    );
                }
                teams.push(team);
            }
            divisions.push(division);
        }
        conferences.push(conference);
    }

    let other_league = r.leagues.add(new_league("XFL", "XFL")).await.expect("league");
    let other_conference = r
        .conferences
        .add(new_conference(other_league.id, "X Conf", "XC"))
        .await
        .expect("conference");
    let other_division = r
        .divisions
        .add(new_division(other_conference.id, "X Div", "XD"))
        .await
        .expect("division");
    let other_team = r
        .teams
        .add(new_team(other_division.id, "X Team"))
        .await
        .expect("team");
    let other_player = r
        .players
        .add(new_player(Some(other_team.id), "X Player", "QB"))
        .await
        .expect("player");

    // free agent: assigned to no team, invisible to hierarchy traversals
    r.players
        .add(new_player(None, "Free Agent", "K"))
        .await
        .expect("player");

    Fanout {
        league,
        other_league,
        conferences,
        divisions,
        teams,
        players,
        other_player,
    }
}
