mod dashboard;
mod home;
mod upload;

pub use dashboard::DashboardPage;
pub use home::Home;
pub use upload::UploadData;
