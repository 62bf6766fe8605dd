mod favorite;
mod occupancy;
mod review;
mod space;
mod user;
