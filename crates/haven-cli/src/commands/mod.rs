pub mod audit;
pub mod dispatch;
pub mod shared;
