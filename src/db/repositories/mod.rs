//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod assignment_repo;
pub mod challenge_repo;
pub mod faculty_repo;
pub mod module_repo;
pub mod program_repo;
pub mod rating_repo;
pub mod report_repo;
pub mod student_challenge_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepository;
pub use challenge_repo::ChallengeRepository;
pub use faculty_repo::FacultyRepository;
pub use module_repo::ModuleRepository;
pub use program_repo::ProgramRepository;
pub use rating_repo::RatingRepository;
pub use report_repo::ReportRepository;
pub use student_challenge_repo::StudentChallengeRepository;
pub use user_repo::UserRepository;
