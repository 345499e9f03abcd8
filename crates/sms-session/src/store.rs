//! The owned session context.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use sms_core::error::AppError;
use sms_core::result::AppResult;
use sms_core::traits::KeyValueStore;
use sms_entity::user::LoginResponse;
use sms_entity::{AdminRole, UserInfo, UserType};

use crate::keys;
use crate::snapshot::SessionSnapshot;

/// Holds the current session and mirrors it into durable storage.
///
/// One instance exists per process; the request pipeline and the route
/// guard receive it as an `Arc`. Every mutation is a single-step write: no
/// caller can observe a half-updated session.
#[derive(Debug)]
pub struct SessionStore {
    /// Durable storage the fields are mirrored into.
    storage: Arc<dyn KeyValueStore>,
    /// In-memory state.
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Rebuild the session from durable storage.
    ///
    /// Damaged entries (unparsable identity, unknown user type or role) are
    /// treated as absent so a bad value never blocks start-up.
    pub fn rehydrate(storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let token = storage.get(keys::TOKEN)?;

        let user_info = match storage.get(keys::USER_INFO)? {
            Some(raw) => match serde_json::from_str::<UserInfo>(&raw) {
                Ok(info) => Some(info),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable persisted identity");
                    None
                }
            },
            None => None,
        };

        let user_type = match storage.get(keys::USER_TYPE)? {
            Some(raw) => match raw.parse::<UserType>() {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!(value = %raw, error = %e, "Discarding unknown persisted user type");
                    None
                }
            },
            None => None,
        };

        let admin_role = match (user_type, storage.get(keys::ADMIN_ROLE)?) {
            (Some(UserType::Admin), Some(raw)) => parse_admin_role(&raw),
            _ => None,
        };

        let snapshot = SessionSnapshot {
            token,
            user_type,
            admin_role,
            user_info,
        };
        debug!(
            authenticated = snapshot.is_authenticated(),
            user_type = ?snapshot.user_type,
            "Session rehydrated"
        );

        Ok(Self {
            storage,
            state: RwLock::new(snapshot),
        })
    }

    /// Install the session returned by a successful login.
    ///
    /// Token, identity, user type and admin sub-role are written to storage
    /// first and then swapped into memory in one assignment. If a storage
    /// write fails the session ends up logged out in both places.
    pub fn establish(&self, login: &LoginResponse) -> AppResult<UserInfo> {
        let identity = login.identity();
        let admin_role = match login.user_type {
            UserType::Admin => login.role.as_deref().and_then(parse_admin_role),
            _ => None,
        };

        let snapshot = SessionSnapshot {
            token: Some(login.token.clone()),
            user_type: Some(login.user_type),
            admin_role,
            user_info: Some(identity.clone()),
        };

        if let Err(e) = self.persist(&snapshot) {
            warn!(error = %e, "Failed to persist session, rolling back storage");
            self.remove_persisted();
            *self.write() = SessionSnapshot::default();
            return Err(e);
        }

        *self.write() = snapshot;
        info!(
            user_id = %identity.user_id,
            user_type = %login.user_type,
            "Session established"
        );
        Ok(identity)
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn clear(&self) -> AppResult<()> {
        *self.write() = SessionSnapshot::default();

        let mut first_error = None;
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove session key");
                first_error.get_or_insert(e);
            }
        }

        debug!("Session cleared");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Replace the identity record, leaving token and roles untouched.
    pub fn update_identity(&self, info: UserInfo) -> AppResult<()> {
        let json = serde_json::to_string(&info)?;
        self.storage.set(keys::USER_INFO, &json)?;
        self.write().user_info = Some(info);
        debug!("Session identity updated");
        Ok(())
    }

    /// Replace the bearer token with one rotated by the server.
    pub fn rotate_token(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Err(AppError::validation("Rotated token is empty"));
        }
        self.storage.set(keys::TOKEN, token)?;
        self.write().token = Some(token.to_string());
        debug!("Bearer token rotated");
        Ok(())
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.read().clone()
    }

    /// Current bearer token.
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Current user type.
    pub fn user_type(&self) -> Option<UserType> {
        self.read().user_type
    }

    /// Current admin sub-role.
    pub fn admin_role(&self) -> Option<AdminRole> {
        self.read().admin_role
    }

    /// Current identity.
    pub fn user_info(&self) -> Option<UserInfo> {
        self.read().user_info.clone()
    }

    /// Whether token and identity are both held.
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Display name of the identity, or an empty string.
    pub fn display_name(&self) -> String {
        self.read().display_name().to_string()
    }

    /// ID of the identity, or an empty string.
    pub fn identity_id(&self) -> String {
        self.read().identity_id().to_string()
    }

    /// Whether the identity is the academic-affairs administrator.
    pub fn is_academic_admin(&self) -> bool {
        self.read().is_academic_admin()
    }

    fn persist(&self, snapshot: &SessionSnapshot) -> AppResult<()> {
        if let Some(token) = &snapshot.token {
            self.storage.set(keys::TOKEN, token)?;
        }
        if let Some(info) = &snapshot.user_info {
            self.storage
                .set(keys::USER_INFO, &serde_json::to_string(info)?)?;
        }
        if let Some(user_type) = snapshot.user_type {
            self.storage.set(keys::USER_TYPE, user_type.as_str())?;
        }
        match snapshot.admin_role {
            Some(role) => self.storage.set(keys::ADMIN_ROLE, role.as_str())?,
            None => self.storage.remove(keys::ADMIN_ROLE)?,
        }
        Ok(())
    }

    fn remove_persisted(&self) {
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove session key during rollback");
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_admin_role(raw: &str) -> Option<AdminRole> {
    match raw.parse::<AdminRole>() {
        Ok(role) => Some(role),
        Err(e) => {
            warn!(value = %raw, error = %e, "Ignoring unknown admin role");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn login_response(user_type: UserType, role: Option<&str>) -> LoginResponse {
        LoginResponse {
            user_id: "S2024001".into(),
            user_name: "张三".into(),
            user_type,
            phone: Some("13800000000".into()),
            email: None,
            role: role.map(String::from),
            token: "token-1".into(),
        }
    }

    fn empty_store() -> (Arc<MemoryStore>, SessionStore) {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::rehydrate(storage.clone()).unwrap();
        (storage, store)
    }

    #[test]
    fn test_establish_sets_memory_and_storage() {
        let (storage, store) = empty_store();
        let identity = store
            .establish(&login_response(UserType::Student, None))
            .unwrap();

        assert_eq!(identity.user_id, "S2024001");
        assert!(store.is_authenticated());
        assert_eq!(store.user_type(), Some(UserType::Student));
        assert_eq!(store.display_name(), "张三");
        assert_eq!(storage.get(keys::TOKEN).unwrap().as_deref(), Some("token-1"));
        assert_eq!(
            storage.get(keys::USER_TYPE).unwrap().as_deref(),
            Some("student")
        );
        assert!(storage.get(keys::USER_INFO).unwrap().is_some());
        assert!(storage.get(keys::ADMIN_ROLE).unwrap().is_none());
    }

    #[test]
    fn test_admin_role_only_kept_for_admins() {
        let (_, store) = empty_store();
        store
            .establish(&login_response(UserType::Advisor, Some("教务管理员")))
            .unwrap();
        assert_eq!(store.admin_role(), None);

        store
            .establish(&login_response(UserType::Admin, Some("教务管理员")))
            .unwrap();
        assert_eq!(store.admin_role(), Some(AdminRole::AcademicAffairs));
        assert!(store.is_academic_admin());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (storage, store) = empty_store();
        store
            .establish(&login_response(UserType::Admin, Some("宿管管理员")))
            .unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), SessionSnapshot::default());
        for key in keys::ALL {
            assert!(storage.get(key).unwrap().is_none(), "{key} not removed");
        }
    }

    #[test]
    fn test_rehydrate_round_trip() {
        let (storage, store) = empty_store();
        store
            .establish(&login_response(UserType::Admin, Some("财务处管理员")))
            .unwrap();

        let reloaded = SessionStore::rehydrate(storage).unwrap();
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_rehydrate_discards_damaged_entries() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::TOKEN, "t").unwrap();
        storage.set(keys::USER_INFO, "{not json").unwrap();
        storage.set(keys::USER_TYPE, "teacher").unwrap();

        let store = SessionStore::rehydrate(storage).unwrap();
        assert_eq!(store.token().as_deref(), Some("t"));
        assert!(store.user_info().is_none());
        assert!(store.user_type().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_update_identity_leaves_token() {
        let (storage, store) = empty_store();
        store
            .establish(&login_response(UserType::Student, None))
            .unwrap();

        let mut info = store.user_info().unwrap();
        info.email = Some("new@example.edu".into());
        store.update_identity(info).unwrap();

        assert_eq!(store.token().as_deref(), Some("token-1"));
        let raw = storage.get(keys::USER_INFO).unwrap().unwrap();
        assert!(raw.contains("new@example.edu"));
    }

    #[test]
    fn test_rotate_token_touches_only_token() {
        let (storage, store) = empty_store();
        store
            .establish(&login_response(UserType::Student, None))
            .unwrap();
        let before = store.snapshot();

        store.rotate_token("token-2").unwrap();

        let after = store.snapshot();
        assert_eq!(after.token.as_deref(), Some("token-2"));
        assert_eq!(after.user_info, before.user_info);
        assert_eq!(after.user_type, before.user_type);
        assert_eq!(storage.get(keys::TOKEN).unwrap().as_deref(), Some("token-2"));
        assert!(store.rotate_token("").is_err());
    }
}
