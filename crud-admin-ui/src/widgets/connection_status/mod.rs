mod component;

pub use component::ConnectionStatus;
