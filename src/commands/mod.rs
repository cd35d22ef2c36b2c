mod back;
mod detail;
mod exit;
mod list;
mod open;
mod show;

pub use back::Back;
pub use detail::Detail;
pub use exit::Exit;
pub use list::List;
pub use open::Open;
pub use show::Show;
