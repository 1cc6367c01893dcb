pub mod admin;
pub mod edit_firma;
pub mod firmen_list;
pub mod home;
pub mod privacy;
pub mod register;
