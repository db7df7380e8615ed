pub mod inspection;
pub mod io;
pub mod system;
