use tempfile::tempdir;

use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();

    assert_eq!(storage.get_item("vuex").unwrap(), None);

    storage.set_item("vuex", "{}").unwrap();
    assert_eq!(storage.get_item("vuex").unwrap().as_deref(), Some("{}"));

    storage.set_item("vuex", "{\"isLogin\":true}").unwrap();
    assert_eq!(
        storage.get_item("vuex").unwrap().as_deref(),
        Some("{\"isLogin\":true}")
    );

    storage.remove_item("vuex").unwrap();
    assert_eq!(storage.get_item("vuex").unwrap(), None);

    storage.remove_item("vuex").unwrap();
}

#[test]
fn file_storage_set_get_remove() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("session"));

    assert_eq!(storage.get_item("vuex").unwrap(), None);

    storage.set_item("vuex", "{}").unwrap();
    assert!(dir.path().join("session").join("vuex.json").exists());
    assert_eq!(storage.get_item("vuex").unwrap().as_deref(), Some("{}"));

    storage.remove_item("vuex").unwrap();
    assert_eq!(storage.get_item("vuex").unwrap(), None);

    storage.remove_item("vuex").unwrap();
}

#[test]
fn file_storage_values_survive_new_instance() {
    let dir = tempdir().unwrap();

    FileStorage::new(dir.path()).set_item("vuex", "value").unwrap();

    let reopened = FileStorage::new(dir.path());
    assert_eq!(reopened.get_item("vuex").unwrap().as_deref(), Some("value"));
}
