//! Page components for the application.

pub mod dashboard;
pub mod login;
pub mod register;

// Re-export all page components for convenient access
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
