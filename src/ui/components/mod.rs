pub mod app;
pub mod dialog;
pub mod navbar;
pub mod search_bar;
pub mod user_card;
pub mod user_form;
pub mod user_list;

pub use app::App;
pub use dialog::{AlertDialog, ConfirmDialog};
pub use navbar::Navbar;
pub use search_bar::SearchBar;
pub use user_card::UserCard;
pub use user_form::{AddUser, UpdateUser, UserForm};
pub use user_list::UserList;
