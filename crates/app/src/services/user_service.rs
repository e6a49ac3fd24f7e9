//! User service — use-cases for managing users.

use miniblog_domain::error::{BlogError, NotFoundError};
use miniblog_domain::id::UserId;
use miniblog_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user. No field validation.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_user(&self, user: NewUser) -> Result<User, BlogError> {
        self.repo.create(user).await
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, BlogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "user",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, BlogError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepo {
        store: Mutex<HashMap<UserId, User>>,
        next_id: Mutex<i64>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn create(&self, user: NewUser) -> impl Future<Output = Result<User, BlogError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let now = Utc::now();
            let user = User {
                id: UserId::from_i64(*next_id),
                name: user.name,
                created_at: now,
                updated_at: now,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(user.id, user.clone());
            async { Ok(user) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, BlogError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<User>, BlogError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result: Vec<User> = store.values().cloned().collect();
            result.sort_by_key(|user| user.id);
            async { Ok(result) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_user() {
        let svc = make_service();
        let created = svc
            .create_user(NewUser {
                name: "Alice".to_string(),
            })
            .await
            .unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched.name, "Alice");
    }

    #[tokio::test]
    async fn should_accept_empty_name_on_create() {
        let svc = make_service();
        let created = svc.create_user(NewUser::default()).await.unwrap();
        assert_eq!(created.name, "");
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::from_i64(999_999)).await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let svc = make_service();
        svc.create_user(NewUser {
            name: "Alice".to_string(),
        })
        .await
        .unwrap();
        svc.create_user(NewUser {
            name: "Bob".to_string(),
        })
        .await
        .unwrap();

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
