pub mod page;
pub mod user_data;

pub use page::{Margins, PageSettings, PageSize};
pub use user_data::{TOKENS, UserData};
