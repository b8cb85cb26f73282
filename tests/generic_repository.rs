mod common;

use common::{new_league, new_player, new_team, repos, seed_nfl};
use league_data::entities::{league, player, team};
use league_data::{QueryOptions, ReadRepository};
use sea_orm::{ColumnTrait, Condition, Order};

#[tokio::test]
async fn test_add_assigns_identity_and_get_by_id_roundtrips() {
    let r = repos().await;

    let added = r.leagues.add(new_league("NFL", "NFL")).await.unwrap();
    assert!(added.id > 0, "identity should be assigned on persist");

    let fetched = r.leagues.get_by_id(added.id).await.unwrap();
    assert_eq!(fetched, Some(added));
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let r = repos().await;
    assert_eq!(r.leagues.get_by_id(4242).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let r = repos().await;
    let added = r.leagues.add(new_league("NFL", "NFL")).await.unwrap();

    let mut changed = added.clone();
    changed.name = "National Football League".to_string();
    changed.external_id = Some(32);

    let updated = r.leagues.update(changed.clone()).await.unwrap();
    assert_eq!(updated, changed);
    assert_eq!(r.leagues.get_by_id(added.id).await.unwrap(), Some(changed));
}

#[tokio::test]
async fn test_find_matches_predicate_only() {
    let r = repos().await;
    r.leagues.add(new_league("NFL", "NFL")).await.unwrap();
    r.leagues.add(new_league("XFL", "XFL")).await.unwrap();

    let found = r
        .leagues
        .find(Condition::all().add(league::Column::Name.eq("NFL")))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "NFL");
}

#[tokio::test]
async fn test_soft_delete_hides_record_but_keeps_row() {
    let r = repos().await;
    let h = seed_nfl(&r).await;

    r.teams.delete(h.team.clone()).await.unwrap();

    // invisible to every default read
    assert_eq!(r.teams.get_by_id(h.team.id).await.unwrap(), None);
    assert!(r.teams.get_all().await.unwrap().is_empty());

    // but the row survives, flagged and timestamped
    let deleted = r
        .teams
        .get_by_predicate(
            Condition::all().add(team::Column::Id.eq(h.team.id)),
            QueryOptions::default().include_deleted(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].is_deleted);
    assert!(deleted[0].deleted_at.is_some());
}

#[tokio::test]
async fn test_hard_delete_removes_row_for_good() {
    let r = repos().await;
    let added = r.leagues.add(new_league("NFL", "NFL")).await.unwrap();

    r.leagues.delete(added.clone()).await.unwrap();

    assert_eq!(r.leagues.get_by_id(added.id).await.unwrap(), None);
    let recovered = r
        .leagues
        .get_by_predicate(
            Condition::all().add(league::Column::Id.eq(added.id)),
            QueryOptions::default().include_deleted(),
        )
        .await
        .unwrap();
    assert!(recovered.is_empty(), "no option recovers a hard delete");
}

#[tokio::test]
async fn test_delete_by_id_missing_is_a_noop() {
    let r = repos().await;
    r.leagues.delete_by_id(4242).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_id_delegates_to_capability_delete() {
    let r = repos().await;
    let h = seed_nfl(&r).await;

    r.players.delete_by_id(h.player.id).await.unwrap();

    // player is soft-deletable: hidden, not removed
    assert_eq!(r.players.get_by_id(h.player.id).await.unwrap(), None);
    let rows = r
        .players
        .get_by_predicate(
            Condition::all().add(player::Column::Id.eq(h.player.id)),
            QueryOptions::default().include_deleted(),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_deleted);
}

#[tokio::test]
async fn test_get_all_excludes_soft_deleted() {
    let r = repos().await;
    let h = seed_nfl(&r).await;
    let second = r
        .players
        .add(new_player(Some(h.team.id), "B. Smith", "WR"))
        .await
        .unwrap();

    r.players.delete(h.player.clone()).await.unwrap();

    let all = r.players.get_all().await.unwrap();
    assert_eq!(all, vec![second]);
}

#[tokio::test]
async fn test_pagination_matches_slices_of_the_full_ordered_result() {
    let r = repos().await;
    let h = seed_nfl(&r).await;
    for i in 0..6 {
        r.teams
            .add(new_team(h.division.id, &format!("Team {i}")))
            .await
            .unwrap();
    }

    let full = r
        .teams
        .get_by_predicate(
            Condition::all(),
            QueryOptions::default().order_by(team::Column::Name, Order::Asc),
        )
        .await
        .unwrap();
    assert_eq!(full.len(), 7);

    // in-range, tail-overlapping, past-the-end and empty pages
    for (skip, take) in [(0, 3), (2, 2), (5, 5), (7, 1), (12, 3), (0, 0)] {
        let page = r
            .teams
            .get_by_predicate(
                Condition::all(),
                QueryOptions::default()
                    .order_by(team::Column::Name, Order::Asc)
                    .skip(skip)
                    .take(take),
            )
            .await
            .unwrap();
        let expected: Vec<_> = full
            .iter()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect();
        assert_eq!(page, expected, "skip {skip} take {take}");
    }
}

#[tokio::test]
async fn test_ordering_applies_before_pagination() {
    let r = repos().await;
    let h = seed_nfl(&r).await;
    for (name, wins) in [("A", 3), ("B", 9), ("C", 6)] {
        let mut team = new_team(h.division.id, name);
        team.win = sea_orm::ActiveValue::Set(wins);
        r.teams.add(team).await.unwrap();
    }

    let top = r
        .teams
        .get_by_predicate(
            Condition::all(),
            QueryOptions::default()
                .order_by(team::Column::Win, Order::Desc)
                .take(1),
        )
        .await
        .unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "B");
}

#[tokio::test]
async fn test_read_only_view_over_the_generic_engine() {
    let r = repos().await;
    seed_nfl(&r).await;

    let reader: &dyn ReadRepository<league::Entity> = &*r.leagues;
    assert_eq!(reader.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_models_serialize_for_the_api_layer() {
    let r = repos().await;
    let h = seed_nfl(&r).await;

    let json = serde_json::to_string(&h.player).unwrap();
    let back: player::Model = serde_json::from_str(&json).unwrap();
    assert_eq!(back, h.player);
}
