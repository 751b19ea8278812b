pub mod about;
pub mod careers;
pub mod clients;
pub mod contact;
pub mod home;
pub mod how_we_work;
pub mod legal;
pub mod not_found;
