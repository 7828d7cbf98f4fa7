pub mod wake_vis2d;
