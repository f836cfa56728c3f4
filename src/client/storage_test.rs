use super::*;
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("devconnect-test-{}", Uuid::new_v4()))
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryTokenStore::new();
    assert!(store.load().is_none());

    store.save("tok").unwrap();
    assert_eq!(store.load().as_deref(), Some("tok"));

    store.clear().unwrap();
    assert!(store.load().is_none());
}

#[test]
fn memory_store_seeded_token_is_visible() {
    let store = MemoryTokenStore::with_token("seeded");
    assert_eq!(store.load().as_deref(), Some("seeded"));
}

#[test]
fn file_store_round_trip() {
    let dir = temp_dir();
    let store = FileTokenStore::new(dir.clone());
    assert!(store.load().is_none());

    store.save("tok").unwrap();
    assert_eq!(store.load().as_deref(), Some("tok"));

    store.clear().unwrap();
    assert!(store.load().is_none());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn file_store_uses_well_known_key() {
    let dir = temp_dir();
    let store = FileTokenStore::new(dir.clone());
    store.save("tok").unwrap();
    assert!(dir.join(TOKEN_KEY).exists());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn file_store_clear_is_idempotent() {
    let store = FileTokenStore::new(temp_dir());
    store.clear().unwrap();
    store.clear().unwrap();
}

#[test]
fn file_store_ignores_blank_content() {
    let dir = temp_dir();
    let store = FileTokenStore::new(dir.clone());
    store.save("   ").unwrap();
    assert!(store.load().is_none());
    let _ = std::fs::remove_dir_all(dir);
}
