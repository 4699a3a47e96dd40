pub mod login;
pub mod play;
pub mod terminal;

pub use login::LoginMode;
pub use play::PlayMode;
