pub mod dispatcher;
pub mod inspector;
pub mod media_codec;
pub mod renderer;
pub mod utils;
