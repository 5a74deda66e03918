// tests/conventional_test.rs
use release_plan::conventional::parse_commit;
use release_plan::domain::commit::is_promotion_commit;

#[test]
fn test_header_forms() {
    let scoped = parse_commit("a1", "feat(auth): add login");
    assert_eq!(scoped.r#type, "feat");
    assert_eq!(scoped.scope.as_deref(), Some("auth"));
    assert!(!scoped.breaking);

    let bare = parse_commit("a2", "fix: correct rounding");
    assert_eq!(bare.r#type, "fix");
    assert_eq!(bare.scope, None);

    let breaking = parse_commit("a3", "refactor(core)!: drop old api");
    assert!(breaking.breaking);

    let fallback = parse_commit("a4", "Merge branch 'main'");
    assert_eq!(fallback.r#type, "chore");
}

#[test]
fn test_release_as_footer_is_a_promotion_signal() {
    let commit = parse_commit(
        "a5",
        "chore: stabilize core\n\nRelease-As: 1.0.0",
    );
    assert!(is_promotion_commit(&commit));
}

#[test]
fn test_release_as_footer_other_version_is_not_promotion() {
    let commit = parse_commit("a6", "chore: pin line\n\nRelease-As: 2.3.0");
    assert!(!is_promotion_commit(&commit));
    assert_eq!(commit.notes[0].text, "2.3.0");
}

#[test]
fn test_breaking_change_footer() {
    let commit = parse_commit(
        "a7",
        "fix: tighten validation\n\nBREAKING CHANGE: rejects empty keys",
    );
    assert!(commit.breaking);
    assert_eq!(commit.notes[0].title, "BREAKING CHANGE");
    assert_eq!(commit.notes[0].text, "rejects empty keys");
}

#[test]
fn test_sha_and_message_are_preserved() {
    let commit = parse_commit("deadbeef", "feat: thing");
    assert_eq!(commit.sha, "deadbeef");
    assert_eq!(commit.message, "feat: thing");
    assert!(commit.files.is_empty());
}
