#[cfg(test)]
mod tests {
    use hrdesk::api::users::UserRole;
    use hrdesk::libs::secret::Secret;
    use hrdesk::libs::session::{AuthSession, FileTokenCache, SessionManager, SessionState, TokenCache};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SecretTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            SecretTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl SecretTestContext {
        fn secret(&self) -> Secret {
            Secret::at(self.temp_dir.path().join(".session"))
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            id: 3,
            username: "kyaw".to_string(),
            name: "Kyaw Kyaw".to_string(),
            user_role: UserRole::Management,
            access_token: "12|plain-text-token".to_string(),
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_and_load(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        assert!(!secret.exists());
        assert_eq!(secret.load().unwrap(), None);

        secret.store("p@ss wörd").unwrap();
        assert!(secret.exists());
        assert_eq!(secret.load().unwrap().as_deref(), Some("p@ss wörd"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_file_is_not_plaintext(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        secret.store("12|plain-text-token").unwrap();
        let raw = fs::read_to_string(secret.path()).unwrap();
        assert!(!raw.contains("plain-text-token"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_clear(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        secret.store("value").unwrap();
        secret.clear().unwrap();
        assert!(!secret.exists());
        assert_eq!(secret.load().unwrap(), None);
        secret.clear().unwrap();
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_corrupt_file_fails_to_load(ctx: &mut SecretTestContext) {
        let secret = ctx.secret();
        fs::write(secret.path(), "not base64 at all!").unwrap();
        assert!(secret.load().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_token_cache_round_trip(ctx: &mut SecretTestContext) {
        let cache = FileTokenCache::with_secret(ctx.secret());
        cache.store(&session()).unwrap();

        let manager = SessionManager::new(FileTokenCache::with_secret(ctx.secret()));
        assert_eq!(manager.state().unwrap(), SessionState::Cached(session()));
        assert!(manager.require_management().is_ok());

        manager.sign_out().unwrap();
        assert!(!ctx.secret().exists());
        assert!(manager.context().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_token_cache_discards_corrupt_file(ctx: &mut SecretTestContext) {
        fs::write(ctx.secret().path(), "garbage").unwrap();

        let cache = FileTokenCache::with_secret(ctx.secret());
        assert_eq!(cache.load().unwrap(), None);
        assert!(!ctx.secret().exists());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_token_cache_discards_malformed_json(ctx: &mut SecretTestContext) {
        ctx.secret().store(r#"{"token":"only"}"#).unwrap();

        let manager = SessionManager::new(FileTokenCache::with_secret(ctx.secret()));
        assert_eq!(manager.state().unwrap(), SessionState::NoToken);
        assert!(!ctx.secret().exists());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_staff_is_not_management(ctx: &mut SecretTestContext) {
        let mut staff = session();
        staff.user_role = UserRole::Staff;
        FileTokenCache::with_secret(ctx.secret()).store(&staff).unwrap();

        let manager = SessionManager::new(FileTokenCache::with_secret(ctx.secret()));
        assert!(manager.require().is_ok());
        let err = manager.require_management().unwrap_err();
        assert!(err.to_string().contains("❌"));
    }
}
