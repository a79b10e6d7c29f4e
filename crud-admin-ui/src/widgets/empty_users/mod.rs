mod component;

pub use component::EmptyUsers;
