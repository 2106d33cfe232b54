//! Core business logic for the authentication system.
//!
//! The session store owns the single process-wide session. All mutations go
//! through `begin_session`, `register_identity`, `end_session` and
//! `replace_identity`; they are serialized by a writer lock so concurrent
//! logins cannot interleave, while readers always see a whole snapshot.

use std::sync::Arc;

use nexushub_adapters::{Credentials, IdentityAdapter, SignupData, User};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument, warn};

use super::errors::AuthError;
use super::models::Session;

pub struct SessionStore {
    directory: Arc<dyn IdentityAdapter>,
    state: RwLock<Session>,
    writer: Mutex<()>,
}

impl SessionStore {
    pub fn new(directory: Arc<dyn IdentityAdapter>) -> Self {
        Self {
            directory,
            state: RwLock::new(Session::anonymous()),
            writer: Mutex::new(()),
        }
    }

    pub fn directory(&self) -> &Arc<dyn IdentityAdapter> {
        &self.directory
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    /// Authenticates the identity whose address matches the credentials.
    ///
    /// The password is not checked. On a miss the session is left as it was
    /// and `InvalidCredentials` is returned.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn begin_session(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let _writer = self.writer.lock().await;
        self.state.write().await.set_loading(true);

        let lookup = self.directory.find_by_address(&credentials.email).await;

        let mut state = self.state.write().await;
        state.set_loading(false);
        match lookup? {
            Some(user) => {
                info!(user_id = %user.id, role = %user.role, "session started");
                state.set_user(Some(user));
                Ok(state.clone())
            }
            None => {
                warn!("login rejected: address not in directory");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Creates an unverified standard account and signs it in.
    ///
    /// Existing accounts with the same address are left alone; a second
    /// signup produces a second entry.
    #[instrument(skip_all, fields(email = %data.email))]
    pub async fn register_identity(&self, data: SignupData) -> Result<Session, AuthError> {
        let _writer = self.writer.lock().await;
        self.state.write().await.set_loading(true);

        let user = User::from_signup(data);
        let inserted = self.directory.insert(user.clone()).await;

        let mut state = self.state.write().await;
        state.set_loading(false);
        inserted?;
        info!(user_id = %user.id, "identity registered");
        state.set_user(Some(user));
        Ok(state.clone())
    }

    pub async fn end_session(&self) -> Session {
        let _writer = self.writer.lock().await;
        let mut state = self.state.write().await;
        if let Some(user) = state.user() {
            info!(user_id = %user.id, "session ended");
        }
        state.set_user(None);
        state.clone()
    }

    /// Force-sets the session identity, used to hydrate a session out of band.
    pub async fn replace_identity(&self, user: Option<User>) -> Session {
        let _writer = self.writer.lock().await;
        let mut state = self.state.write().await;
        match &user {
            Some(user) => info!(user_id = %user.id, role = %user.role, "session identity replaced"),
            None => info!("session identity cleared"),
        }
        state.set_user(user);
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    use nexushub_adapters::{AdapterError, InMemoryDirectory, UserRole};
    use tokio::sync::Notify;

    fn store() -> (Arc<InMemoryDirectory>, SessionStore) {
        let directory = Arc::new(InMemoryDirectory::seeded());
        let store = SessionStore::new(directory.clone());
        (directory, store)
    }

    fn creds(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "whatever".to_string(),
        }
    }

    #[tokio::test]
    async fn every_directory_identity_can_sign_in_with_any_password() {
        let (directory, store) = store();
        for user in directory.list().await.unwrap() {
            let session = store.begin_session(&creds(&user.email)).await.unwrap();
            assert!(session.is_authenticated());
            assert_eq!(session.user(), Some(&user));
            assert!(!session.is_loading());
        }
    }

    #[tokio::test]
    async fn unknown_address_leaves_session_unchanged() {
        let (_, store) = store();
        let before = store.snapshot().await;
        let err = store.begin_session(&creds("nobody@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(store.snapshot().await, before);

        store.begin_session(&creds("host@nexushub.com")).await.unwrap();
        let before = store.snapshot().await;
        assert!(store.begin_session(&creds("nobody@example.com")).await.is_err());
        assert_eq!(store.snapshot().await, before);
        assert_eq!(store.snapshot().await.role(), Some(UserRole::Host));
    }

    #[tokio::test]
    async fn end_session_is_idempotent() {
        let (_, store) = store();
        let session = store.end_session().await;
        assert!(!session.is_authenticated());

        store.begin_session(&creds("admin@nexushub.com")).await.unwrap();
        let session = store.end_session().await;
        assert!(session.user().is_none());
        assert!(!store.end_session().await.is_authenticated());
    }

    #[tokio::test]
    async fn register_signs_in_unverified_standard_user() {
        let (directory, store) = store();
        let session = store
            .register_identity(SignupData {
                email: "new@x.com".into(),
                name: "New Person".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(session.is_authenticated());
        let user = session.user().unwrap();
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_verified);
        assert_eq!(directory.find_by_address("new@x.com").await.unwrap().as_ref(), Some(user));
    }

    #[tokio::test]
    async fn duplicate_signup_creates_second_entry() {
        let (directory, store) = store();
        let signup = SignupData {
            email: "new@x.com".into(),
            name: "New Person".into(),
            ..Default::default()
        };
        let first = store.register_identity(signup.clone()).await.unwrap();
        let second = store.register_identity(signup).await.unwrap();

        let entries: Vec<User> = directory
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|u| u.email == "new@x.com")
            .collect();
        assert_eq!(entries.len(), 2);
        assert_ne!(first.user().unwrap().id, second.user().unwrap().id);
        assert_eq!(second.user(), entries.last());
    }

    #[tokio::test]
    async fn replace_identity_switches_without_logout() {
        let (directory, store) = store();
        store.begin_session(&creds("user@nexushub.com")).await.unwrap();

        let admin = directory.find_by_address("admin@nexushub.com").await.unwrap();
        let session = store.replace_identity(admin).await;
        assert_eq!(session.role(), Some(UserRole::Admin));

        let session = store.replace_identity(None).await;
        assert!(!session.is_authenticated());
    }

    struct GatedDirectory {
        inner: InMemoryDirectory,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl IdentityAdapter for GatedDirectory {
        async fn find_by_address(&self, address: &str) -> Result<Option<User>, AdapterError> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.find_by_address(address).await
        }

        async fn insert(&self, user: User) -> Result<(), AdapterError> {
            self.inner.insert(user).await
        }

        async fn list(&self) -> Result<Vec<User>, AdapterError> {
            self.inner.list().await
        }
    }

    fn gated() -> (Arc<GatedDirectory>, Arc<SessionStore>) {
        let directory = Arc::new(GatedDirectory {
            inner: InMemoryDirectory::seeded(),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let store = Arc::new(SessionStore::new(directory.clone()));
        (directory, store)
    }

    #[tokio::test]
    async fn loading_flag_is_set_while_lookup_is_pending() {
        let (directory, store) = gated();

        let pending = {
            let store = store.clone();
            tokio::spawn(async move { store.begin_session(&creds("admin@nexushub.com")).await })
        };

        directory.entered.notified().await;
        let mid = store.snapshot().await;
        assert!(mid.is_loading());
        assert!(!mid.is_authenticated());

        directory.release.notify_one();
        let session = pending.await.unwrap().unwrap();
        assert!(!session.is_loading());
        assert_eq!(session.role(), Some(UserRole::Admin));
    }

    #[tokio::test]
    async fn logout_waits_for_in_flight_login() {
        let (directory, store) = gated();

        let login = {
            let store = store.clone();
            tokio::spawn(async move { store.begin_session(&creds("admin@nexushub.com")).await })
        };
        directory.entered.notified().await;

        let mut logout = {
            let store = store.clone();
            tokio::spawn(async move { store.end_session().await })
        };
        let early = tokio::time::timeout(Duration::from_millis(50), &mut logout).await;
        assert!(early.is_err(), "logout finished while a login held the session");

        directory.release.notify_one();
        let session = login.await.unwrap().unwrap();
        assert_eq!(session.role(), Some(UserRole::Admin));

        let session = logout.await.unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(store.snapshot().await, Session::anonymous());
    }

    #[tokio::test]
    async fn replace_waits_for_in_flight_login() {
        let (directory, store) = gated();
        let host = directory.inner.find_by_address("host@nexushub.com").await.unwrap();

        let login = {
            let store = store.clone();
            tokio::spawn(async move { store.begin_session(&creds("admin@nexushub.com")).await })
        };
        directory.entered.notified().await;

        let mut replace = {
            let store = store.clone();
            tokio::spawn(async move { store.replace_identity(host).await })
        };
        assert!(tokio::time::timeout(Duration::from_millis(50), &mut replace).await.is_err());

        directory.release.notify_one();
        login.await.unwrap().unwrap();
        assert_eq!(replace.await.unwrap().role(), Some(UserRole::Host));
        assert_eq!(store.snapshot().await.role(), Some(UserRole::Host));
    }

    #[tokio::test]
    async fn concurrent_logins_apply_in_lock_order() {
        let (directory, store) = gated();

        let first = {
            let store = store.clone();
            tokio::spawn(async move { store.begin_session(&creds("admin@nexushub.com")).await })
        };
        directory.entered.notified().await;

        let second = {
            let store = store.clone();
            tokio::spawn(async move { store.begin_session(&creds("host@nexushub.com")).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(store.snapshot().await.is_loading());
        assert!(!second.is_finished());

        directory.release.notify_one();
        assert_eq!(first.await.unwrap().unwrap().role(), Some(UserRole::Admin));

        directory.entered.notified().await;
        directory.release.notify_one();
        assert_eq!(second.await.unwrap().unwrap().role(), Some(UserRole::Host));

        let session = store.snapshot().await;
        assert_eq!(session.role(), Some(UserRole::Host));
        assert!(!session.is_loading());
    }

    struct DownDirectory;

    #[async_trait]
    impl IdentityAdapter for DownDirectory {
        async fn find_by_address(&self, _: &str) -> Result<Option<User>, AdapterError> {
            Err(AdapterError::Unavailable("offline".into()))
        }

        async fn insert(&self, _: User) -> Result<(), AdapterError> {
            Err(AdapterError::Unavailable("offline".into()))
        }

        async fn list(&self) -> Result<Vec<User>, AdapterError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn directory_failure_clears_loading_flag() {
        let store = SessionStore::new(Arc::new(DownDirectory));
        let err = store.begin_session(&creds("admin@nexushub.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::Directory(_)));

        let err = store.register_identity(SignupData::default()).await.unwrap_err();
        assert!(matches!(err, AuthError::Directory(_)));
        assert_eq!(store.snapshot().await, Session::anonymous());
    }
}
