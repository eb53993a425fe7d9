pub mod colormap;
pub mod hooks;
