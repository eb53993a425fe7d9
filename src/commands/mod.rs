pub mod colormap;
pub mod hook;
pub mod lint;
