pub mod dashboard;
pub mod history;
pub mod landing;
pub mod onboarding;
