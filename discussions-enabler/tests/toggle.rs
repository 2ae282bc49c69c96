mod common;

use common::{test_settings, ScriptedBrowser};
use discussions_enabler::{enable_feature, RepositoryRef, ToggleError, ToggleStatus};

#[tokio::test]
async fn unchecked_box_is_clicked() {
    let mut browser = ScriptedBrowser::new().with_repo("alice/repoA", false);
    let repo = RepositoryRef::new("alice", "repoA");

    let status = enable_feature(&mut browser, &test_settings(), &repo, false)
        .await
        .unwrap();

    assert_eq!(status, ToggleStatus::Enabled);
    assert_eq!(browser.clicks, ["alice/repoA"]);
    assert!(browser.is_enabled("alice/repoA"));
    assert_eq!(
        browser.navigations,
        ["https://github.com/alice/repoA/settings#features"]
    );
}

#[tokio::test]
async fn second_toggle_is_a_no_op() {
    let mut browser = ScriptedBrowser::new().with_repo("alice/repoA", false);
    let repo = RepositoryRef::new("alice", "repoA");
    let settings = test_settings();

    let first = enable_feature(&mut browser, &settings, &repo, false)
        .await
        .unwrap();
    let second = enable_feature(&mut browser, &settings, &repo, false)
        .await
        .unwrap();

    assert_eq!(first, ToggleStatus::Enabled);
    assert_eq!(second, ToggleStatus::AlreadyEnabled);
    assert_eq!(browser.clicks.len(), 1);
    assert!(browser.is_enabled("alice/repoA"));
}

#[tokio::test]
async fn checked_box_is_left_alone() {
    let mut browser = ScriptedBrowser::new().with_repo("alice/repoA", true);
    let repo = RepositoryRef::new("alice", "repoA");

    let status = enable_feature(&mut browser, &test_settings(), &repo, false)
        .await
        .unwrap();

    assert_eq!(status, ToggleStatus::AlreadyEnabled);
    assert!(browser.clicks.is_empty());
}

#[tokio::test]
async fn dry_run_does_not_click() {
    let mut browser = ScriptedBrowser::new().with_repo("alice/repoA", false);
    let repo = RepositoryRef::new("alice", "repoA");

    let status = enable_feature(&mut browser, &test_settings(), &repo, true)
        .await
        .unwrap();

    assert_eq!(status, ToggleStatus::WouldEnable);
    assert!(browser.clicks.is_empty());
    assert!(!browser.is_enabled("alice/repoA"));
}

#[tokio::test]
async fn missing_checkbox_is_reported() {
    let mut browser = ScriptedBrowser::new().with_locked_repo("alice/archived");
    let repo = RepositoryRef::new("alice", "archived");

    let result = enable_feature(&mut browser, &test_settings(), &repo, false).await;

    assert!(matches!(result, Err(ToggleError::CheckboxNotRendered(_))));
    assert!(browser.clicks.is_empty());
}
