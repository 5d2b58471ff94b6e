//! Stateless image operations. Each takes the input by reference and returns a
//! new image; nothing here mutates its argument.

pub mod channel;
pub mod circle;
pub mod negate;
pub mod rotate;

pub use channel::{isolate_channel, Channel};
pub use circle::draw_circle;
pub use negate::negate;
pub use rotate::rotate_about_center;
