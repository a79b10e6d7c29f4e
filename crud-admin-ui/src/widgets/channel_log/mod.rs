mod component;

pub use component::ChannelLogView;
