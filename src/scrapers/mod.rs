mod deal_page;

pub use deal_page::DealPage;
