use std::io::Cursor;
use std::path::Path;

use disha::catalog::{Catalog, Listing};
use disha::narrator::mock::MockNarrator;
use disha::render::NO_MATCHES;
use disha::session::Session;
use disha::store::UserStore;

fn listing(title: &str, location: &str, skills: &[&str]) -> Listing {
    Listing {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        link: "http://x".to_string(),
    }
}

fn catalog() -> Catalog {
    Catalog::from_listings(vec![
        listing("Data Intern", "Mumbai", &["SQL"]),
        listing("Web Intern", "Pune, Maharashtra", &["Javascript"]),
    ])
}

async fn run_session(
    input: &str,
    store_path: &Path,
    catalog: &Catalog,
    narrator: &MockNarrator,
) -> (anyhow::Result<String>, String) {
    let mut store = UserStore::load(store_path).unwrap();
    let mut transcript = Vec::new();
    let reply = {
        let mut session = Session::new(
            Cursor::new(input.to_string()),
            &mut transcript,
            &mut store,
            catalog,
            narrator,
        );
        session.run().await
    };
    (reply, String::from_utf8(transcript).unwrap())
}

#[tokio::test]
async fn full_session_saves_profile_and_returns_reply() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("Here are your matches!");

    let (reply, transcript) = run_session(
        "priya\n9876543210\npython, sql\npune\n",
        &path,
        &catalog,
        &narrator,
    )
    .await;

    assert_eq!(reply.unwrap(), "Here are your matches!");
    assert!(transcript.contains("Enter your name"));
    assert!(transcript.contains("phone number"));

    let store = UserStore::load(&path).unwrap();
    let saved = store.find("9876543210").unwrap();
    assert_eq!(saved.name, "Priya");
    assert_eq!(saved.skills, vec!["Python", "Sql"]);
    assert_eq!(saved.location, "Pune");
}

#[tokio::test]
async fn invalid_inputs_reprompt_until_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    // Bad name twice, then a bad phone, before good values
    let (reply, transcript) = run_session(
        "R2D2\nAsha Rao\nAsha\n12345\n9876543210\nsql\ndelhi\n",
        &path,
        &catalog,
        &narrator,
    )
    .await;

    assert!(reply.is_ok());
    assert_eq!(transcript.matches("Invalid name").count(), 2);
    assert_eq!(transcript.matches("starting with 6-9").count(), 1);

    let store = UserStore::load(&path).unwrap();
    assert_eq!(store.find("9876543210").unwrap().name, "Asha");
}

#[tokio::test]
async fn returning_user_keeps_stored_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    let (first, _) = run_session(
        "asha\n9876543210\npython\npune\n",
        &path,
        &catalog,
        &narrator,
    )
    .await;
    first.unwrap();

    // Second visit types a different name at the prompt
    let (second, transcript) = run_session(
        "priya\n9876543210\nsql\nmumbai\n",
        &path,
        &catalog,
        &narrator,
    )
    .await;
    second.unwrap();

    assert!(transcript.contains("Welcome back, Asha!"));

    let store = UserStore::load(&path).unwrap();
    assert_eq!(store.len(), 1);
    let saved = store.find("9876543210").unwrap();
    assert_eq!(saved.name, "Asha");
    assert_eq!(saved.skills, vec!["Sql"]);
    assert_eq!(saved.location, "Mumbai");
}

#[tokio::test]
async fn narrator_receives_the_rendered_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    // Delhi location matches nothing, SQL matches the Mumbai listing
    run_session("asha\n9876543210\nsql\ndelhi\n", &path, &catalog, &narrator)
        .await
        .0
        .unwrap();

    let prompts = narrator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("1. Data Intern at Acme (Mumbai)"));
    assert!(!prompts[0].contains("Web Intern"));
    assert!(prompts[0].contains("\"name\":\"Asha\""));
}

#[tokio::test]
async fn no_matches_sends_the_fixed_no_results_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    run_session(
        "asha\n9876543210\nknitting\nkochi\n",
        &path,
        &catalog,
        &narrator,
    )
    .await
    .0
    .unwrap();

    let prompts = narrator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(NO_MATCHES));
}

#[tokio::test]
async fn location_substring_match_reaches_the_narrator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    // "pune" should match "Pune, Maharashtra" with no skill overlap
    run_session(
        "asha\n9876543210\ncobol\npune\n",
        &path,
        &catalog,
        &narrator,
    )
    .await
    .0
    .unwrap();

    let prompts = narrator.prompts();
    assert!(prompts[0].contains("Web Intern"));
    assert!(!prompts[0].contains("Data Intern"));
}

#[tokio::test]
async fn profile_is_saved_even_if_narration_is_the_last_step() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    run_session("asha\n9876543210\nsql\npune\n", &path, &catalog, &narrator)
        .await
        .0
        .unwrap();

    // The store on disk already has the profile narrated about
    let store = UserStore::load(&path).unwrap();
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn eof_mid_session_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let catalog = catalog();
    let narrator = MockNarrator::new("ok");

    let (reply, _) = run_session("asha\n9876543210\n", &path, &catalog, &narrator).await;
    assert!(reply.is_err());
    assert!(narrator.prompts().is_empty());
}
