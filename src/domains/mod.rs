pub mod ai;
pub mod legacy;
pub mod notification;
