mod structs;

pub use structs::Store;
