
use crate::server::model::user::User;

/// Converts a factory-created user row into the domain model.
fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
