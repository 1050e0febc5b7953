pub mod registry;
pub mod cd;
pub mod help;
pub mod prev;
pub mod source;
pub mod system;
