pub mod event;
pub mod notification;
pub mod record;

pub use event::{WalletEvent, WalletEventKind};
pub use notification::{NotificationKind, WalletNotification};
pub use record::{Wallet, WalletKind};
