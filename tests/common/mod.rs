#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use storefront::application::services::{AuthService, ProductService, RoleService, UserService};
use storefront::domain::entities::{
    NewProduct, NewRole, NewUser, Product, Role, Stock, UpdateProduct, UpdateRole, UpdateUser,
    User,
};
use storefront::domain::repositories::{ProductRepository, RoleRepository, UserRepository};
use storefront::error::AppError;
use storefront::infrastructure::cache::NullCache;
use storefront::state::AppState;
use storefront::utils::password::{MIN_COST, PasswordHasher};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-0123456789";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    roles: Vec<Role>,
    products: Vec<Product>,
    user_roles: Vec<(i64, i64)>,
    next_user_id: i64,
    next_role_id: i64,
    next_product_id: i64,
}

impl Tables {
    fn roles_of(&self, user_id: i64) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .user_roles
            .iter()
            .filter(|(u, _)| *u == user_id)
            .filter_map(|(_, r)| self.roles.iter().find(|role| role.id == *r).cloned())
            .collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles
    }

    fn with_roles(&self, user: &User) -> User {
        User {
            roles: self.roles_of(user.id),
            ..user.clone()
        }
    }
}

/// In-memory store implementing every repository trait.
///
/// `calls()` counts repository invocations so tests can assert that a
/// rejected request never reached the data layer.
#[derive(Default)]
pub struct InMemoryDb {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
}

impl InMemoryDb {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().unwrap()
    }
}

fn email_taken() -> AppError {
    AppError::conflict("Email already registered", json!({}))
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut t = self.tables();
        if t.users.iter().any(|u| u.email == new_user.email) {
            return Err(email_taken());
        }
        t.next_user_id += 1;
        let now = Utc::now();
        let user = User::new(
            t.next_user_id,
            new_user.name,
            new_user.email,
            new_user.password_hash,
            Vec::new(),
            now,
            now,
        );
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let t = self.tables();
        Ok(t.users.iter().find(|u| u.id == id).map(|u| t.with_roles(u)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let t = self.tables();
        Ok(t.users
            .iter()
            .find(|u| u.email == email)
            .map(|u| t.with_roles(u)))
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let mut t = self.tables();
        if let Some(ref email) = update.email
            && t.users.iter().any(|u| u.email == *email && u.id != id)
        {
            return Err(email_taken());
        }
        let user = t
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        let user = user.clone();
        Ok(t.with_roles(&user))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, AppError> {
        let t = self.tables();
        Ok(t.users
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|u| t.with_roles(u))
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables().users.len() as i64)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        let before = t.users.len();
        t.users.retain(|u| u.id != id);
        t.user_roles.retain(|(u, _)| *u != id);
        Ok(t.users.len() < before)
    }

    async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<(), AppError> {
        let mut t = self.tables();
        if !t.user_roles.contains(&(user_id, role_id)) {
            t.user_roles.push((user_id, role_id));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for InMemoryDb {
    async fn create(&self, new_role: NewRole) -> Result<Role, AppError> {
        let mut t = self.tables();
        if t.roles.iter().any(|r| r.name == new_role.name) {
            return Err(AppError::conflict("Role already exists", json!({})));
        }
        t.next_role_id += 1;
        let now = Utc::now();
        let role = Role::new(t.next_role_id, new_role.name, now, now);
        t.roles.push(role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError> {
        Ok(self.tables().roles.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        Ok(self.tables().roles.iter().find(|r| r.name == name).cloned())
    }

    async fn update(&self, id: i64, update: UpdateRole) -> Result<Role, AppError> {
        let mut t = self.tables();
        let role = t
            .roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Role not found", json!({ "id": id })))?;
        if let Some(name) = update.name {
            role.name = name;
        }
        role.updated_at = Utc::now();
        Ok(role.clone())
    }

    async fn list(&self) -> Result<Vec<Role>, AppError> {
        let mut roles = self.tables().roles.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        let before = t.roles.len();
        t.roles.retain(|r| r.id != id);
        t.user_roles.retain(|(_, r)| *r != id);
        Ok(t.roles.len() < before)
    }
}

#[async_trait]
impl ProductRepository for InMemoryDb {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let mut t = self.tables();
        t.next_product_id += 1;
        let id = t.next_product_id;
        let now = Utc::now();
        let product = Product::new(
            id,
            new_product.name,
            new_product.description,
            new_product.price,
            Stock {
                id,
                product_id: id,
                quantity: new_product.quantity,
                created_at: now,
                updated_at: now,
            },
            now,
            now,
        );
        t.products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.tables().products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError> {
        Ok(self
            .tables()
            .products
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn update(&self, id: i64, update: UpdateProduct) -> Result<Product, AppError> {
        let mut t = self.tables();
        let product = t
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;
        let now = Utc::now();
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(quantity) = update.quantity {
            product.stock.quantity = quantity;
            product.stock.updated_at = now;
        }
        product.updated_at = now;
        Ok(product.clone())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        Ok(self
            .tables()
            .products
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables().products.len() as i64)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        let before = t.products.len();
        t.products.retain(|p| p.id != id);
        Ok(t.products.len() < before)
    }
}

/// Builds an [`AppState`] over a fresh [`InMemoryDb`].
pub fn create_test_state() -> (AppState, Arc<InMemoryDb>) {
    let db = Arc::new(InMemoryDb::default());
    let hasher = PasswordHasher::new(MIN_COST);

    let users: Arc<dyn UserRepository> = db.clone();
    let roles: Arc<dyn RoleRepository> = db.clone();
    let products: Arc<dyn ProductRepository> = db.clone();

    let state = AppState::new(
        Arc::new(UserService::new(users.clone(), roles.clone(), hasher)),
        Arc::new(RoleService::new(roles)),
        Arc::new(ProductService::new(products)),
        Arc::new(AuthService::new(
            users,
            hasher,
            TEST_JWT_SECRET.to_string(),
            3600,
        )),
        Arc::new(NullCache::new()),
    );

    (state, db)
}

/// Registers a user directly through the service and returns a bearer token for it.
pub async fn create_user_with_token(state: &AppState, email: &str) -> (User, String) {
    let user = state
        .user_service
        .create_user("Test User".to_string(), email.to_string(), "supersecretpassword")
        .await
        .unwrap();
    let token = state.auth_service.issue_token(&user).unwrap().access_token;
    (user, token)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
