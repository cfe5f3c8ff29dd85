//! Repository Integration Tests
//!
//! Tests for the key-value store and session store with SQLite databases.

#[cfg(test)]
mod tests {
    use crate::repository::{init_db, KeyValueStore, SessionStore, SqliteKvStore, DbState, TOKEN_KEY};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    async fn setup_test_db() -> DbState {
        // Use in-memory database for tests
        init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB")
    }

    fn session_for(db: &DbState) -> SessionStore {
        SessionStore::new(Arc::new(SqliteKvStore::new(db.conn.clone())))
    }

    #[tokio::test]
    async fn test_kv_set_and_get() {
        let db = setup_test_db().await;
        let kv = SqliteKvStore::new(db.conn.clone());

        assert_eq!(kv.get("missing").await.unwrap(), None);
        kv.set("k", "v1").await.unwrap();
        kv.set("k", "v2").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_kv_remove_missing_key_is_ok() {
        let db = setup_test_db().await;
        let kv = SqliteKvStore::new(db.conn.clone());
        kv.remove("never-set").await.expect("remove should be idempotent");
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let db = setup_test_db().await;
        let session = session_for(&db);

        assert_eq!(session.get().await.unwrap(), None);
        session.set("abc123").await.unwrap();
        assert_eq!(session.get().await.unwrap().as_deref(), Some("abc123"));
        assert_eq!(session.bearer().await.as_deref(), Some("abc123"));

        session.clear().await.unwrap();
        assert_eq!(session.get().await.unwrap(), None);
        assert_eq!(session.bearer().await, None);
    }

    #[tokio::test]
    async fn test_session_uses_token_slot() {
        let db = setup_test_db().await;
        let session = session_for(&db);
        session.set("xyz").await.unwrap();

        let kv = SqliteKvStore::new(db.conn.clone());
        assert_eq!(kv.get(TOKEN_KEY).await.unwrap().as_deref(), Some("xyz"));
    }

    #[tokio::test]
    async fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("promo_lojas.db");

        {
            let db = init_db(&path).await.unwrap();
            session_for(&db).set("persisted").await.unwrap();
        }

        let db = init_db(Path::new(&path)).await.unwrap();
        assert_eq!(session_for(&db).get().await.unwrap().as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn test_uninitialized_db_reports_storage_error() {
        let db = DbState::new();
        let session = session_for(&db);

        assert!(session.get().await.is_err());
        // Reads for outgoing requests degrade to "no token"
        assert_eq!(session.bearer().await, None);
    }

    #[tokio::test]
    async fn test_wait_ready_times_out_without_install() {
        let db = DbState::new();
        assert!(!db.wait_ready(Duration::from_millis(20)).await);
        assert!(!db.is_initialized().await);
    }

    #[tokio::test]
    async fn test_session_check_waits_for_late_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("promo_lojas.db");
        {
            let db = init_db(&path).await.unwrap();
            session_for(&db).set("saved-token").await.unwrap();
        }

        // Managed state exists before the database is opened in the background
        let db = DbState::new();
        let session = session_for(&db);
        let background = db.clone();
        let opener = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let opened = init_db(&path).await.unwrap();
            let conn = opened.conn.lock().await.take().unwrap();
            background.install(conn).await;
        });

        assert!(db.wait_ready(Duration::from_secs(5)).await);
        assert_eq!(session.bearer().await.as_deref(), Some("saved-token"));
        // Already open: returns at once
        assert!(db.wait_ready(Duration::from_millis(1)).await);
        opener.await.unwrap();
    }
}
