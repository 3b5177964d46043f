pub mod teacher;
pub mod student;
pub mod registration;
pub mod requests;

pub use teacher::*;
pub use student::*;
pub use registration::*;
pub use requests::*;
