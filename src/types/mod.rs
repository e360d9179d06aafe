mod response;
pub use self::response::ApiResponse;

mod frame;
pub use self::frame::{DataFrame, Record};

mod daily;
pub use self::daily::{DailyBar, DailySeries};

mod basic;
pub use self::basic::StockBasic;
