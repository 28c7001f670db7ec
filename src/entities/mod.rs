pub mod favorite;
pub mod product;
pub mod setting;

pub use favorite::Entity as Favorite;
pub use product::Entity as Product;
pub use setting::Entity as Setting;
