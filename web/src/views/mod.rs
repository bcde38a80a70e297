mod home;
mod privacy;

pub use home::HomePage;
pub use privacy::PrivacyPage;
