mod page;
mod table_card;

pub use page::Page;
pub use table_card::TableCard;
