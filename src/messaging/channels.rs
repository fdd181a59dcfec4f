// Lock-free change notification channel

use crate::messaging::notification::ChangeNotification;
use ringbuf::{HeapRb, traits::Split};

pub type ChangeProducer = ringbuf::HeapProd<ChangeNotification>;
pub type ChangeConsumer = ringbuf::HeapCons<ChangeNotification>;

pub fn create_change_channel(capacity: usize) -> (ChangeProducer, ChangeConsumer) {
    let rb = HeapRb::<ChangeNotification>::new(capacity);
    rb.split()
}
