pub mod links;
pub mod matcher;
pub mod tween;
