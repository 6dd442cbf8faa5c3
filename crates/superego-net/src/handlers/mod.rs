mod answer;
mod change_card;
mod guess;
mod read;
mod ready;
mod subscribe;

pub use answer::handle as answer;
pub use change_card::handle as change_card;
pub use guess::handle as guess;
pub use read::handle as read;
pub use ready::handle as ready;
pub use subscribe::handle as subscribe;
