use crate::auth::sessions;
use crate::config::Config;
use crate::db::auth::get_or_create_user;
use crate::db::connection::{init_db, Database};
use crate::db::listings::seed_listings_if_empty;
use crate::domain::fixtures::sample_listings;
use crate::recommend::Recommender;
use crate::router::unix_now;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ADMIN_EMAIL: &str = "admin@example.com";

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Removes the database file (and any sqlite side files) when dropped.
pub struct TempDbFile {
    path: PathBuf,
}

impl TempDbFile {
    fn new() -> Self {
        let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "land_site_test_{}_{}.sqlite3",
            std::process::id(),
            n
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDbFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        for suffix in ["-journal", "-wal", "-shm"] {
            let mut side = self.path.clone().into_os_string();
            side.push(suffix);
            let _ = std::fs::remove_file(side);
        }
    }
}

/// A fresh database file per call, so parallel tests never share rows.
/// The file lives as long as the returned guard.
pub fn init_test_db() -> (Database, TempDbFile) {
    let file = TempDbFile::new();
    let db = Database::new(file.path().to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (db, file)
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "ADMIN_EMAILS" => Some(ADMIN_EMAIL.to_string()),
        "BASE_URL" => Some("http://localhost:3000".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// App state plus the temp file behind its database.
pub struct TestState {
    state: AppState,
    _file: TempDbFile,
}

impl TestState {
    pub fn with_recommender(self, recommender: Box<dyn Recommender>) -> Self {
        Self {
            state: self.state.with_recommender(recommender),
            _file: self._file,
        }
    }
}

impl Deref for TestState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

/// State over a fresh database holding the six sample listings.
pub fn test_state() -> TestState {
    let (db, file) = init_test_db();
    db.with_conn(|conn| seed_listings_if_empty(conn, &sample_listings(), 1_000))
        .expect("seed listings");
    TestState {
        state: AppState::new(db, test_config()),
        _file: file,
    }
}

/// Session token for `email`, created directly in the database.
pub fn session_for(state: &AppState, email: &str) -> String {
    let now = unix_now();
    state
        .db
        .with_conn(|conn| {
            let user_id = get_or_create_user(conn, email, now)?;
            sessions::create_session(conn, user_id, now)
        })
        .expect("create session")
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, session: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", format!("session={session}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[test]
fn test_database_file_is_removed_with_its_state() {
    let state = test_state();
    let path = state._file.path().to_path_buf();
    assert!(path.exists());

    drop(state);
    assert!(!path.exists());
}
