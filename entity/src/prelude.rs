pub use super::current_occupancy::Entity as CurrentOccupancy;
pub use super::favorite::Entity as Favorite;
pub use super::occupancy_reading::Entity as OccupancyReading;
pub use super::review::Entity as Review;
pub use super::space::Entity as Space;
pub use super::user::Entity as User;
