//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new events of type `T`. Motion sources use it to fan sensor samples out to the
//! flip counter, and the flip counter uses it to report outcomes to whoever displays them.
//!
//! ### Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use publisher::{Listener, Publishable, Publisher};
//!
//! let publisher = Publisher::<String>::new();
//! let received = Arc::new(Mutex::new(Vec::new()));
//!
//! // Register a listener
//! let mut listener = Listener::new({
//!     let received = received.clone();
//!     move |_id, data: Arc<String>| received.lock().unwrap().push((*data).clone())
//! });
//! let listener_id = publisher.register_listener(&mut listener);
//!
//! // Notify all listeners
//! publisher.notify_listeners(Arc::new("Hello, World!".to_string()));
//! assert_eq!(received.lock().unwrap().len(), 1);
//!
//! // Unregister the listener
//! publisher.unregister_listener(listener_id).unwrap();
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;

pub use listener::Listener;
pub use publisher::{Publishable, Publisher, PublisherError};
