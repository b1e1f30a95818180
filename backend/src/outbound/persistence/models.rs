//! Diesel row structs. Internal to the persistence adapter.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserValidationError};

use super::schema::users;

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        User::try_from_parts(row.id, row.name, row.email, row.age)
    }
}

/// Insert payload; `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> NewUserRow<'a> {
    pub(crate) fn from_domain(id: Uuid, user: &'a NewUser) -> Self {
        Self {
            id,
            name: user.name.as_str(),
            email: user.email.as_str(),
            age: user.age.get(),
        }
    }
}
