mod inspection;
pub use inspection::InspectionPage;
