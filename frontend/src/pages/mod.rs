pub mod about;
pub mod admin;
pub mod booking_action;
pub mod careers;
pub mod contact;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod practice_areas;
pub mod team_member;
