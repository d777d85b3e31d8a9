use std::collections::HashSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use multilist::config::SeedMode;
use multilist::models::{AddCityModal, BusinessField, ListingStatus};
use multilist::seed::us_cities;
use multilist::services::{filter_catalog, Session};

fn sample_session() -> Session {
    Session::new(&SeedMode::Sample.build())
}

fn add(session: &mut Session, city: &str, state: &str) -> String {
    session.open_modal();
    session.select(city, state).expect("city should be selectable");
    session.confirm_add().expect("selection should add").id
}

#[test]
fn sample_summary_counts() {
    let summary = sample_session().summary();
    assert_eq!((summary.active, summary.review, summary.pending), (2, 1, 1));
}

#[test]
fn tx_search_on_sample_catalog() {
    let session = sample_session();
    let result = filter_catalog(&us_cities(), session.listings(), "tx");
    let labels: Vec<String> = result.entries.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["Dallas, TX", "Austin, TX"]);
}

#[test]
fn add_miami_through_the_dialog() {
    let mut session = sample_session();
    let before = Utc::now().date_naive();
    session.open_modal();
    session.select("Miami", "FL").unwrap();
    let added = session.confirm_add().unwrap();
    let after = Utc::now().date_naive();

    assert_eq!(session.listings().len(), 5);
    assert_eq!(session.listings().last(), Some(&added));
    assert_eq!(added.status, ListingStatus::Pending);
    assert!(added.added_date == before || added.added_date == after);
    assert_eq!(session.modal(), &AddCityModal::Closed);
    assert!(session.modal().selected().is_none());
}

#[test]
fn added_city_is_no_longer_offered() {
    let mut session = sample_session();
    add(&mut session, "Dallas", "TX");
    session.open_modal();
    session.set_query("tx".into()).unwrap();
    let offered: Vec<String> = session.candidates().entries.iter().map(|c| c.label()).collect();
    assert_eq!(offered, ["Austin, TX"]);
}

#[test]
fn business_edit_has_no_rollback() {
    let mut session = sample_session();
    session.toggle_edit();
    session.update_field(BusinessField::Phone, "(555) 999-0000".into());
    session.toggle_edit();
    assert!(!session.is_editing_business());
    assert_eq!(session.business().phone, "(555) 999-0000");
}

#[test]
fn reselecting_does_not_deselect() {
    let mut session = sample_session();
    session.open_modal();
    for _ in 0..3 {
        session.select("Portland", "OR").unwrap();
        assert_eq!(session.modal().selected().map(|c| c.city.as_str()), Some("Portland"));
    }
}

// Random add/remove sequences: ids stay unique, counts move by exactly one,
// the summary always adds up, and listed places are never offered.
#[test]
fn random_add_remove_sequences_hold_invariants() {
    let catalog = us_cities();
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = sample_session();
        for _ in 0..60 {
            let before = session.listings().to_vec();
            if rng.gen_bool(0.5) {
                session.open_modal();
                let offered = session.candidates().entries;
                if offered.is_empty() {
                    assert!(session.confirm_add().is_err());
                    session.close_modal();
                } else {
                    let pick = &offered[rng.gen_range(0..offered.len())];
                    session.select(&pick.city, &pick.state).unwrap();
                    let added = session.confirm_add().unwrap();
                    assert_eq!(session.listings().len(), before.len() + 1);
                    assert_eq!((added.city.as_str(), added.state.as_str()), (pick.city.as_str(), pick.state.as_str()));
                    assert_eq!(added.status, ListingStatus::Pending);
                    assert!(!filter_catalog(&catalog, session.listings(), "").entries.contains(pick));
                }
            } else if !before.is_empty() && rng.gen_bool(0.8) {
                let victim = before[rng.gen_range(0..before.len())].clone();
                let removed = session.remove_listing(&victim.id);
                assert_eq!(removed.as_ref(), Some(&victim));
                assert_eq!(session.listings().len(), before.len() - 1);
                assert!(session.listings().iter().all(|l| l.id != victim.id));
            } else {
                assert!(session.remove_listing("no-such-id").is_none());
                assert_eq!(session.listings(), before.as_slice());
            }

            let ids: HashSet<&str> = session.listings().iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids.len(), session.listings().len(), "duplicate id with seed {}", seed);
            assert_eq!(session.summary().total(), session.listings().len());
            let places: HashSet<(&str, &str)> =
                session.listings().iter().map(|l| (l.city.as_str(), l.state.as_str())).collect();
            assert_eq!(places.len(), session.listings().len());
        }
    }
}
