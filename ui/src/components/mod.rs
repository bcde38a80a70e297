pub mod footer;
pub mod simple;
pub mod widget;

pub use footer::*;
pub use simple::*;
pub use widget::*;
