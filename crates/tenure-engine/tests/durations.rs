//! End-to-end pipeline tests: seeded store -> activity query -> durations.

use tenure_engine::{
    ActiveCondition, ActivityPersons, ActivityVar, DurationPersons, DurationVar,
    SnapshotCondition, Source,
};
use tenure_store::{Database, NoMergesCondition, PeriodCondition};
use tenure_testing::{day, team_history, two_person_history};
use tenure_types::{Person, TimeWindow};

#[test]
fn ages_for_authors_at_a_snapshot() {
    let db = two_person_history().unwrap();
    let persons = ActivityPersons::new(ActivityVar::ListAuthors, &[], Source::Session(db)).unwrap();
    let activity = persons.activity().unwrap();

    let snapshot = SnapshotCondition::new(day(2014, 1, 1));
    let ages = DurationPersons::new(DurationVar::Age, activity, &[&snapshot])
        .durations()
        .unwrap();

    assert_eq!(ages.get(&Person::from("Alice")).unwrap().num_days(), 365);
    assert_eq!(ages.get(&Person::from("Bob")).unwrap().num_days(), 306);

    let json = ages.to_json();
    assert_eq!(json["Alice"], 365 * 86_400);
    assert_eq!(json["Bob"], 306 * 86_400);
}

#[test]
fn idle_defaults_to_latest_event_as_snapshot() {
    let db = two_person_history().unwrap();
    let persons = ActivityPersons::new(ActivityVar::ListAuthors, &[], Source::Session(db)).unwrap();

    let idle = DurationPersons::new(DurationVar::Idle, persons.activity().unwrap(), &[])
        .durations()
        .unwrap();

    // implicit snapshot is Alice's June commit
    assert_eq!(idle.get(&Person::from("Alice")).unwrap().num_days(), 0);
    assert_eq!(idle.get(&Person::from("Bob")).unwrap().num_days(), 92);
}

#[test]
fn query_and_duration_conditions_compose() {
    let db = team_history().unwrap();
    let nomerges = NoMergesCondition;
    let period = PeriodCondition::new(TimeWindow::until(day(2014, 1, 1)));
    let persons = ActivityPersons::new(
        ActivityVar::ListUauthors,
        &[&period, &nomerges],
        Source::Session(db),
    )
    .unwrap();

    let snapshot = SnapshotCondition::new(day(2014, 1, 1));
    let active = ActiveCondition::new(TimeWindow::since(day(2013, 5, 1)));
    let ages = DurationPersons::new(
        DurationVar::Age,
        persons.activity().unwrap(),
        &[&snapshot, &active],
    )
    .durations()
    .unwrap();

    // The merge commit is excluded at query time, so unified Alice's last
    // event is June and she is active since May; Bob's March commit is not.
    // Carol's November commit keeps her active.
    assert_eq!(ages.len(), 2);
    assert_eq!(ages.get(&Person::from("Alice")).unwrap().num_days(), 365);
    assert_eq!(ages.get(&Person::from("Carol")).unwrap().num_days(), 61);
    assert!(ages.get(&Person::from("Bob")).is_none());
}

#[test]
fn connect_source_opens_the_store_at_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commits.db");

    // seed through one handle, read through a fresh Connect
    let db = Database::open(&path).unwrap();
    let alice = db
        .find_or_insert_person(&tenure_store::PersonRecord {
            name: "Alice".to_string(),
            email: None,
        })
        .unwrap();
    db.insert_commit(&tenure_store::CommitRecord {
        hash: "c1".to_string(),
        author_id: alice,
        committer_id: alice,
        author_date: day(2013, 1, 1),
        commit_date: day(2013, 1, 1),
        is_merge: false,
    })
    .unwrap();
    drop(db);

    let persons = ActivityPersons::new(
        ActivityVar::ListAuthors,
        &[],
        Source::Connect {
            path,
            echo: false,
        },
    )
    .unwrap();

    let activity = persons.activity().unwrap();
    assert_eq!(activity.len(), 1);
    assert_eq!(activity.maxend().unwrap(), day(2013, 1, 1));
}
