//! User model and roles

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Closed set of roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Lecturer,
    ProgramLeader,
    PrincipalLecturer,
    Student,
}

impl Role {
    /// Program leaders and principal lecturers administer the platform
    pub fn is_admin(self) -> bool {
        matches!(self, Role::ProgramLeader | Role::PrincipalLecturer)
    }

    pub fn is_student(self) -> bool {
        self == Role::Student
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Lecturer => "Lecturer",
            Role::ProgramLeader => "Program Leader",
            Role::PrincipalLecturer => "Principal Lecturer",
            Role::Student => "Student",
        };
        f.write_str(label)
    }
}

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub faculty_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_roles() {
        assert!(Role::ProgramLeader.is_admin());
        assert!(Role::PrincipalLecturer.is_admin());
        assert!(!Role::Lecturer.is_admin());
        assert!(!Role::Student.is_admin());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&Role::PrincipalLecturer).unwrap(),
            "\"principal_lecturer\""
        );
        let role: Role = serde_json::from_str("\"program_leader\"").unwrap();
        assert_eq!(role, Role::ProgramLeader);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_role_display_label() {
        assert_eq!(Role::ProgramLeader.to_string(), "Program Leader");
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Thabo".into(),
            email: "thabo@luct.ac.ls".into(),
            password_hash: "$argon2id$secret".into(),
            role: Role::Lecturer,
            faculty_id: None,
            program_id: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "lecturer");
    }
}
