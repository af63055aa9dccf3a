//! End-to-end API tests against a throwaway PostgreSQL container
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tower::ServiceExt;

use luct_reporting::{
    auth::JwtAuthProvider,
    config::{Config, DatabaseConfig, JwtConfig, LogFormat, LoggingConfig, ServerConfig},
    db, handlers,
    state::AppState,
};

struct TestApp {
    router: Router,
    _container: ContainerAsync<Postgres>,
}

/// A signed-up user and their bearer token
struct User {
    id: String,
    token: String,
}

impl TestApp {
    async fn start() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to connect to test database");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: "test_secret_key_for_testing_only".to_string(),
                expiry_hours: 1,
            },
            logging: LoggingConfig {
                filter: "warn".to_string(),
                format: LogFormat::Pretty,
            },
        };
        let auth = Arc::new(JwtAuthProvider::from_config(&config.jwt));
        let router = handlers::app(AppState::new(pool, auth, config));

        Self {
            router,
            _container: container,
        }
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("/api/v1{}", uri));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn get(&self, uri: &str, user: &User) -> (StatusCode, Value) {
        self.call(Method::GET, uri, Some(&user.token), None).await
    }

    async fn post(&self, uri: &str, user: &User, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(&user.token), Some(body)).await
    }

    async fn put(&self, uri: &str, user: &User, body: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(&user.token), Some(body)).await
    }

    async fn delete(&self, uri: &str, user: &User) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, Some(&user.token), None).await
    }

    /// Sign up and log in, returning the user id and token
    async fn user(&self, name: &str, role: &str, program_id: Option<&str>) -> User {
        let email = format!("{}@luct.ac.ls", name.to_lowercase().replace(' ', "."));
        let (status, body) = self
            .call(
                Method::POST,
                "/auth/signup",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": "correct-horse",
                    "role": role,
                    "program_id": program_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup {}: {}", name, body);

        let (status, body) = self
            .call(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({"email": email, "password": "correct-horse"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login {}: {}", name, body);

        User {
            id: body["user"]["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    async fn faculty_id(&self, user: &User, name: &str) -> String {
        let (_, body) = self.get("/faculties", user).await;
        body["faculties"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == name)
            .map(|f| f["id"].as_str().unwrap().to_string())
            .unwrap()
    }

    async fn program(&self, leader: &User, code: &str, name: &str) -> String {
        let faculty_id = self.faculty_id(leader, "Computer").await;
        let (status, body) = self
            .post(
                "/programs",
                leader,
                json!({"program_code": code, "program_name": name, "faculty_id": faculty_id}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["program"]["id"].as_str().unwrap().to_string()
    }

    async fn module(&self, leader: &User, program_id: &str, name: &str, students: i32) -> String {
        let (status, body) = self
            .post(
                "/modules",
                leader,
                json!({
                    "module_name": name,
                    "program_id": program_id,
                    "total_registered_students": students,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

fn report_body(program_id: &str, module_id: &str, faculty_id: &str) -> Value {
    json!({
        "faculty_id": faculty_id,
        "module_id": module_id,
        "program_id": program_id,
        "week_of_reporting": "Week 6",
        "date_of_lecture": "2025-03-14",
        "actual_students_present": 30,
        "total_registered_students": 40,
        "venue": "Hall 3",
        "scheduled_time": "08:30",
        "topic_taught": "Normalisation",
        "learning_outcomes": "Students can reach 3NF",
        "recommendations": "More lab time",
    })
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_catalog_and_assignment_flow() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let lecturer = app.user("Thabo Lecturer", "lecturer", None).await;

    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let (status, body) = app
        .post(
            "/programs",
            &leader,
            json!({"program_code": "SE101", "program_name": "Another"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = app
        .post(
            "/modules",
            &leader,
            json!({
                "module_name": "DB Systems",
                "program_id": program_id,
                "total_registered_students": 40,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["program_code"], "SE101");
    assert_eq!(body["faculty_name"], "Computer");
    assert_eq!(body["assignment_count"], 0);
    let module_id = body["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(
            "/modules",
            &leader,
            json!({
                "module_name": "DB Systems",
                "program_id": program_id,
                "total_registered_students": 40,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let assignment = json!({
        "module_id": module_id,
        "program_id": program_id,
        "lecturer_id": lecturer.id,
    });
    let (status, body) = app.post("/lecture-assignments", &leader, assignment.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, body) = app.post("/lecture-assignments", &leader, assignment).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "This assignment already exists");

    let (status, body) = app
        .post(
            "/lecture-assignments",
            &leader,
            json!({"module_id": module_id, "program_id": program_id, "lecturer_id": leader.id}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = app.get("/lecture-assignments", &leader).await;
    let assignments = body["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["lecturer_name"], "Thabo Lecturer");
    assert_eq!(assignments[0]["module_name"], "DB Systems");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_report_visibility_and_feedback_overwrite() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let principal = app.user("Mpho Principal", "principal_lecturer", None).await;
    let lecturer = app.user("Thabo Lecturer", "lecturer", None).await;
    let other = app.user("Lerato Lecturer", "lecturer", None).await;

    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let module_id = app.module(&leader, &program_id, "DB Systems", 40).await;
    let faculty_id = app.faculty_id(&leader, "Computer").await;

    let (status, body) = app
        .post("/reports", &lecturer, report_body(&program_id, &module_id, &faculty_id))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["report"]["status"], "submitted");
    assert_eq!(body["report"]["actual_students_present"], 30);
    let report_id = body["report"]["id"].as_str().unwrap().to_string();

    let (_, body) = app.get("/reports", &lecturer).await;
    assert_eq!(body["reports"].as_array().unwrap().len(), 1);
    assert_eq!(body["reports"][0]["module_name"], "DB Systems");
    let (_, body) = app.get("/reports", &other).await;
    assert!(body["reports"].as_array().unwrap().is_empty());
    let (_, body) = app.get("/reports", &principal).await;
    assert_eq!(body["reports"].as_array().unwrap().len(), 1);

    let feedback_uri = format!("/reports/{}/feedback", report_id);
    let (status, _) = app.put(&feedback_uri, &principal, json!({"feedback": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .put(&feedback_uri, &principal, json!({"feedback": "Good coverage"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["status"], "reviewed");

    let (_, body) = app
        .put(&feedback_uri, &principal, json!({"feedback": "Revisit BCNF"}))
        .await;
    assert_eq!(body["report"]["principal_feedback"], "Revisit BCNF");

    let (status, _) = app
        .put(
            "/reports/00000000-0000-0000-0000-000000000000/feedback",
            &principal,
            json!({"feedback": "x"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_module_rating_upsert_converges() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let module_id = app.module(&leader, &program_id, "DB Systems", 40).await;
    let other_program = app.program(&leader, "BIT201", "Business IT").await;
    let foreign_module = app.module(&leader, &other_program, "Accounting", 25).await;
    let student = app.user("Neo Student", "student", Some(&program_id)).await;

    let (status, body) = app
        .post("/module-ratings", &student, json!({"module_id": module_id, "rating": 4}))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["outcome"], "submitted");

    let (_, body) = app
        .post(
            "/module-ratings",
            &student,
            json!({"module_id": module_id, "rating": 2, "comments": "Too fast"}),
        )
        .await;
    assert_eq!(body["outcome"], "updated");

    let (_, body) = app.get("/student/module-ratings", &student).await;
    let ratings = body["ratings"].as_array().unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0]["rating"], 2);
    assert_eq!(ratings[0]["comments"], "Too fast");

    let (status, _) = app
        .post("/module-ratings", &student, json!({"module_id": module_id, "rating": 6}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post("/module-ratings", &student, json!({"module_id": foreign_module, "rating": 5}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "ACCESS_DENIED");

    let (_, body) = app.get("/ratings", &leader).await;
    assert_eq!(body["ratings"].as_array().unwrap().len(), 1);
    assert_eq!(body["ratings"][0]["student_name"], "Neo Student");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_student_challenges_are_scoped_and_ordered() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let module_id = app.module(&leader, &program_id, "DB Systems", 40).await;
    let other_program = app.program(&leader, "BIT201", "Business IT").await;
    let foreign_module = app.module(&leader, &other_program, "Accounting", 25).await;
    let student = app.user("Neo Student", "student", Some(&program_id)).await;
    let classmate = app.user("Kamo Student", "student", Some(&program_id)).await;

    let (status, body) = app
        .post(
            "/student/challenges",
            &student,
            json!({"module_id": foreign_module, "title": "Lost", "description": "Not my class"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "ACCESS_DENIED");

    let mut ids = Vec::new();
    for (title, priority) in [("Slides", "low"), ("Lab access", "high"), ("Pace", "medium")] {
        let (status, body) = app
            .post(
                "/student/challenges",
                &student,
                json!({
                    "module_id": module_id,
                    "title": title,
                    "description": "Needs attention",
                    "priority": priority,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        ids.push((
            body["id"].as_str().unwrap().to_string(),
            timestamp(&body["updated_at"]),
        ));
    }

    let (_, body) = app.get("/student/challenges", &student).await;
    let titles: Vec<&str> = body["challenges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Lab access", "Pace", "Slides"]);

    let (_, body) = app.get("/student/challenges", &classmate).await;
    assert!(body["challenges"].as_array().unwrap().is_empty());

    let (first_id, first_updated_at) = &ids[0];
    let uri = format!("/student/challenges/{}", first_id);
    let (status, body) = app.put(&uri, &classmate, json!({"status": "resolved"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "ACCESS_DENIED");

    tokio::time::sleep(Duration::from_millis(20)).await;
    let (status, body) = app.put(&uri, &student, json!({"status": "resolved"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenge"]["status"], "resolved");
    let resolved_at = timestamp(&body["challenge"]["updated_at"]);
    assert!(resolved_at > *first_updated_at);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let (_, body) = app.put(&uri, &student, json!({"status": "pending"})).await;
    assert_eq!(body["challenge"]["status"], "pending");
    assert!(timestamp(&body["challenge"]["updated_at"]) > resolved_at);

    let (status, _) = app.put(&uri, &student, json!({"status": "closed"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/student/modules", &student).await;
    assert_eq!(body["has_program"], true);
    assert_eq!(body["modules"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_delete_is_blocked_until_dependents_are_gone() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let lecturer = app.user("Thabo Lecturer", "lecturer", None).await;
    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let module_id = app.module(&leader, &program_id, "DB Systems", 40).await;

    let (_, body) = app
        .post(
            "/lecture-assignments",
            &leader,
            json!({"module_id": module_id, "program_id": program_id, "lecturer_id": lecturer.id}),
        )
        .await;
    let assignment_id = body["assignment"]["id"].as_str().unwrap().to_string();

    let module_uri = format!("/modules/{}", module_id);
    let (status, body) = app.delete(&module_uri, &leader).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("1 assignment(s)")
    );

    let program_uri = format!("/programs/{}", program_id);
    let (status, _) = app.delete(&program_uri, &leader).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .delete(&format!("/lecture-assignments/{}", assignment_id), &leader)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&module_uri, &leader).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&module_uri, &leader).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&program_uri, &leader).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_lecturer_challenge_visibility_and_resolution() {
    let app = TestApp::start().await;
    let leader = app.user("Palesa Leader", "program_leader", None).await;
    let author = app.user("Thabo Lecturer", "lecturer", None).await;
    let other = app.user("Lerato Lecturer", "lecturer", None).await;
    let program_id = app.program(&leader, "SE101", "Software Engineering").await;
    let module_id = app.module(&leader, &program_id, "DB Systems", 40).await;

    let (status, body) = app
        .post(
            "/challenges",
            &author,
            json!({
                "module_id": module_id,
                "program_id": program_id,
                "challenge_type": "resources",
                "description": "Projector broken",
                "impact": "Slides unreadable",
                "proposed_solution": "Replace bulb",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["lecturer_name"], "Thabo Lecturer");
    assert!(body["resolved_date"].is_null());
    let challenge_uri = format!("/challenges/{}", body["id"].as_str().unwrap());

    let (status, _) = app
        .post(
            "/challenges",
            &author,
            json!({
                "module_id": "00000000-0000-0000-0000-000000000000",
                "program_id": program_id,
                "challenge_type": "resources",
                "description": "d",
                "impact": "i",
                "proposed_solution": "p",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get(&challenge_uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (_, body) = app.get("/challenges", &other).await;
    assert!(body["challenges"].as_array().unwrap().is_empty());
    let (_, body) = app.get("/challenges", &leader).await;
    assert_eq!(body["challenges"].as_array().unwrap().len(), 1);

    let (_, body) = app.get("/challenges/stats", &leader).await;
    assert_eq!(body["pending"], 1);
    assert_eq!(body["resolved"], 0);
    let (_, body) = app.get("/challenges/stats", &author).await;
    assert_eq!(body["pending"], 1);
    let (_, body) = app.get("/challenges/stats", &other).await;
    assert_eq!(body, json!({"pending": 0, "in_progress": 0, "resolved": 0}));

    let (status, body) = app
        .put(
            &challenge_uri,
            &leader,
            json!({"status": "resolved", "admin_feedback": "Bulb ordered"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenge"]["status"], "resolved");
    let resolved_date = body["challenge"]["resolved_date"].clone();
    assert!(resolved_date.is_string());

    // Feedback alone leaves status and resolution date as they were.
    let (status, body) = app
        .put(&challenge_uri, &leader, json!({"admin_feedback": "Bulb fitted"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenge"]["status"], "resolved");
    assert_eq!(body["challenge"]["resolved_date"], resolved_date);
    assert_eq!(body["challenge"]["admin_feedback"], "Bulb fitted");

    let (status, body) = app
        .put(&challenge_uri, &leader, json!({"admin_feedback": ""}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenge"]["admin_feedback"], "");

    for reopened in ["in_progress", "pending"] {
        let (_, body) = app
            .put(&challenge_uri, &leader, json!({"status": "resolved"}))
            .await;
        assert!(body["challenge"]["resolved_date"].is_string());

        let (status, body) = app
            .put(&challenge_uri, &leader, json!({"status": reopened}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["challenge"]["status"], reopened);
        assert!(body["challenge"]["resolved_date"].is_null());
    }

    let (_, body) = app.get("/challenges/stats", &author).await;
    assert_eq!(body["pending"], 1);
    assert_eq!(body["resolved"], 0);

    let (status, _) = app.delete(&challenge_uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete(&challenge_uri, &author).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_signup_rules() {
    let app = TestApp::start().await;
    app.user("Palesa Leader", "program_leader", None).await;

    let (status, body) = app
        .call(
            Method::POST,
            "/auth/signup",
            None,
            Some(json!({
                "name": "Palesa Again",
                "email": "PALESA.LEADER@luct.ac.ls",
                "password": "correct-horse",
                "role": "lecturer",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{}", body);

    let (status, _) = app
        .call(
            Method::POST,
            "/auth/signup",
            None,
            Some(json!({
                "name": "No Program",
                "email": "no.program@luct.ac.ls",
                "password": "correct-horse",
                "role": "student",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .call(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({"email": "palesa.leader@luct.ac.ls", "password": "wrong-horse"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIAL");
}
