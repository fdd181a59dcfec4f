// Messaging between the sketch core and the renderer

pub mod channels;
pub mod notification;

pub use channels::{ChangeConsumer, ChangeProducer, create_change_channel};
pub use notification::{ChangeKind, ChangeNotification};
