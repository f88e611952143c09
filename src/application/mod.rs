// Application layer - Use cases and repository seams
pub mod chart_session;
pub mod report_repository;
