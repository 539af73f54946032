pub mod bid;
pub mod event;
pub mod ticket;
pub mod user;

pub use bid::*;
pub use event::*;
pub use ticket::*;
pub use user::*;
