mod component;

pub use component::UserTable;
