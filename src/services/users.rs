//! User service, kept for interface compatibility with the original client.
//! Nothing in the warehouse feature authenticates; these records are inert.

use std::sync::Arc;

use tracing::instrument;

use crate::errors::ServiceError;
use crate::models::{NewUser, User};
use crate::store::WarehouseStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<WarehouseStore>,
}

impl UserService {
    pub fn new(store: Arc<WarehouseStore>) -> Self {
        Self { store }
    }

    pub fn get_user(&self, id: i32) -> Result<User, ServiceError> {
        self.store
            .get_user(id)
            .ok_or_else(|| ServiceError::NotFound(format!("User {id} not found")))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<User, ServiceError> {
        self.store
            .get_user_by_username(username)
            .ok_or_else(|| ServiceError::NotFound(format!("User '{username}' not found")))
    }

    /// Stores the record and returns it as stored. Validation happens at the
    /// request boundary; the store performs none.
    #[instrument(skip(self, new), fields(username = %new.username))]
    pub fn create_user(&self, new: NewUser) -> User {
        self.store.create_user(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_fetch() {
        let service = UserService::new(Arc::new(WarehouseStore::new()));
        let created = service.create_user(NewUser {
            username: "packer".into(),
            password: "secret".into(),
        });

        assert_eq!(service.get_user(created.id).unwrap().username, "packer");
        assert_eq!(
            service.get_user_by_username("packer").unwrap().id,
            created.id
        );
        assert!(matches!(
            service.get_user(999),
            Err(ServiceError::NotFound(_))
        ));
    }
}
